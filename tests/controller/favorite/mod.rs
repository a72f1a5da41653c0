mod character;
mod starship;
