use std::io::Read;

use design_core::designos::workflow::sanitize_model_reply;

// Reads one raw model reply (file argument, or stdin when no argument is
// given) and prints the sanitized two-field mockup document on stdout. The
// coercion tier goes to stderr so piped output stays clean JSON.
fn main() {
    let args: Vec<String> = std::env::args().collect();
    let raw = match args.get(1) {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("MOCKUP_SANITIZER read {}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("MOCKUP_SANITIZER read stdin: {}", e);
                std::process::exit(2);
            }
            buf
        }
    };

    let report = sanitize_model_reply(&raw);
    eprintln!("MOCKUP_SANITIZER tier={}", report.tier.as_str());
    println!("{}", report.json);
}
