mod client;
mod energy;
mod sites;

pub use client::Client;
