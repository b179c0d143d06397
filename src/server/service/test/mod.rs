mod authorization;
mod project;
mod user;
