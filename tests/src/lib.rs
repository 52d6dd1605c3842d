mod scenarios;
mod scoring;
