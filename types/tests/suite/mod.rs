mod properties;
mod scenarios;
mod shared;
