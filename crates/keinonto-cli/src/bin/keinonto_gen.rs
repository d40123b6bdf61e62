// keinonto-gen: Generate inflected forms of a stored word.
//
// With FORM arguments ("case_number", e.g. inessive_plural) prints each
// requested form on its own line. Without them prints the whole paradigm
// as tab-separated key/form pairs.
//
// Usage:
//   keinonto-gen [-d DB] LEMMA [FORM...]
//
// Options:
//   -d, --db PATH   Word database file
//   -h, --help      Print help

use std::io::{self, Write};

use keinonto_fi::FormKey;

fn main() {
    keinonto_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (db_path, args) = keinonto_cli::parse_db_path(&args);

    if keinonto_cli::wants_help(&args) {
        println!("keinonto-gen: Generate inflected forms of a Finnish noun.");
        println!();
        println!("Usage: keinonto-gen [-d DB] LEMMA [FORM...]");
        println!();
        println!("FORM is a case/number key such as genitive_singular or inessive_plural.");
        println!("Without FORM arguments the whole paradigm is printed.");
        println!();
        println!("Options:");
        println!("  -d, --db PATH   Word database file");
        println!("  -h, --help      Print this help");
        return;
    }

    let Some((lemma, keys)) = args.split_first() else {
        keinonto_cli::fatal("expected LEMMA (see --help)");
    };
    let keys: Vec<FormKey> = keys
        .iter()
        .map(|k| k.parse().unwrap_or_else(|e: keinonto_core::ParseError| keinonto_cli::fatal(&e.to_string())))
        .collect();

    let db = keinonto_cli::resolve_db_path(db_path.as_deref()).unwrap_or_else(|e| keinonto_cli::fatal(&e));
    let generator = keinonto_cli::load_generator(&db).unwrap_or_else(|e| keinonto_cli::fatal(&e));

    let lines: Vec<String> = if keys.is_empty() {
        generator
            .get_all_forms(lemma)
            .unwrap_or_else(|e| keinonto_cli::fatal(&e.to_string()))
            .into_iter()
            .map(|(key, form)| format!("{key}\t{form}"))
            .collect()
    } else {
        keys.iter()
            .map(|key| {
                generator
                    .generate(lemma, key.case, key.number)
                    .unwrap_or_else(|e| keinonto_cli::fatal(&e.to_string()))
            })
            .collect()
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();
}
