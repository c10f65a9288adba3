mod batch_generation;
mod config_json;
mod leet_flow;
mod passphrase_flow;
mod syllables_flow;
