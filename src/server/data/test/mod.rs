mod department;
mod employee;
mod project;
mod user;
