mod create_user;
mod get_users;
