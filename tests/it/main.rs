
mod commands;
mod gestures;
mod selection;
