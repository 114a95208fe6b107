mod details;
mod failures;
mod loading;
mod views;
