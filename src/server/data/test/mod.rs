mod project;
mod sprint;
mod user;
