use std::env;
use std::fs;
use std::path::Path;

// Bakes .env values (BACKEND_URL etc.) into the binary at compile time,
// so the deployed wasm bundle needs no runtime configuration.
fn main() {
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }

    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            // Real environment variables win over .env entries
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
