mod contact;
mod dashboard;
mod manage;
