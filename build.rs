// ============================================================================
// BUILD - Configuración del portal en tiempo de compilación
// ============================================================================
// Exporta a `option_env!` solo las claves que lee `config::AppConfig`.
// El entorno real gana sobre `.env`.
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;

const CONFIG_KEYS: [&str; 4] = ["GRAPHQL_URL", "APP_NAME", "ENVIRONMENT", "ENABLE_LOGGING"];

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"').trim_matches('\'')))
}

fn check_value(key: &str, value: &str) {
    match key {
        "GRAPHQL_URL" if !(value.starts_with('/') || value.starts_with("http")) => {
            println!("cargo:warning=GRAPHQL_URL='{}' no es ni ruta (/api/graphql) ni URL absoluta", value);
        }
        "ENVIRONMENT" if value != "development" && value != "production" => {
            println!("cargo:warning=ENVIRONMENT='{}' desconocido, se tratará como development", value);
        }
        "ENABLE_LOGGING" if value.parse::<bool>().is_err() => {
            println!("cargo:warning=ENABLE_LOGGING='{}' no es true/false, se usará true", value);
        }
        _ => {}
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Sin .env: GraphQL en /api/graphql. Copia .env.example a .env para cambiarlo.");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env: clave '{}' ignorada", key);
            continue;
        }
        if env::var(key).is_ok() {
            continue;
        }
        check_value(key, value);
        println!("cargo:rustc-env={}={}", key, value);
    }
}
