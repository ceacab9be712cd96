mod contact_request;
mod game_server;
mod website;
