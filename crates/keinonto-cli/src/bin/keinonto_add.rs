// keinonto-add: Add a word to the lexicon from its witness forms.
//
// Reads a JSON object of witness forms keyed "case_number" and stores the
// word. Without --class the declension class and gradation are inferred;
// with --class the word is built in that class and any form the class
// cannot reproduce is kept as an override. --gradation fixes the pattern
// of a --class word instead of reading it off the witnesses.
//
// Usage:
//   keinonto-add [-d DB] [-c CLASS [-g GRADATION]] FORMS_FILE
//
// Options:
//   -d, --db PATH              Word database file
//   -c, --class CLASS          Declension class (1-51 or model word)
//   -g, --gradation PATTERN    Gradation pattern (kk-k, t-d, k-, none, ...)
//   -h, --help                 Print help

use std::path::Path;

use keinonto_fi::{DeclensionClass, GradationPattern};

fn main() {
    keinonto_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (db_path, args) = keinonto_cli::parse_db_path(&args);
    let (class, args) = keinonto_cli::take_option(&args, "--class", "-c");
    let (gradation, args) = keinonto_cli::take_option(&args, "--gradation", "-g");

    if keinonto_cli::wants_help(&args) {
        println!("keinonto-add: Add a Finnish noun from its witness forms.");
        println!();
        println!("Usage: keinonto-add [-d DB] [-c CLASS [-g GRADATION]] FORMS_FILE");
        println!();
        println!("FORMS_FILE is a JSON object such as");
        println!("  {{\"nominative_singular\": \"sana\", \"genitive_singular\": \"sanan\"}}");
        println!("The nominative singular is required. With --class all six of");
        println!("nominative_singular, genitive_singular, partitive_singular,");
        println!("nominative_plural, inessive_singular and illative_singular are.");
        println!();
        println!("Options:");
        println!("  -d, --db PATH              Word database file");
        println!("  -c, --class CLASS          Declension class (1-51 or model word)");
        println!("  -g, --gradation PATTERN    Gradation pattern for --class (kk-k, t-d, k-, none, ...)");
        println!("  -h, --help                 Print this help");
        return;
    }

    let [forms_file] = args.as_slice() else {
        keinonto_cli::fatal("expected exactly one FORMS_FILE argument (see --help)");
    };

    let class = class.map(|c| {
        c.parse::<DeclensionClass>()
            .unwrap_or_else(|e| keinonto_cli::fatal(&e.to_string()))
    });
    let gradation = gradation.map(|g| {
        g.parse::<GradationPattern>()
            .unwrap_or_else(|e| keinonto_cli::fatal(&e.to_string()))
    });
    if gradation.is_some() && class.is_none() {
        keinonto_cli::fatal("--gradation requires --class");
    }
    let witnesses = keinonto_cli::load_witnesses(Path::new(forms_file))
        .unwrap_or_else(|e| keinonto_cli::fatal(&e));

    let db = keinonto_cli::resolve_db_path(db_path.as_deref()).unwrap_or_else(|e| keinonto_cli::fatal(&e));
    let generator = keinonto_cli::load_generator(&db).unwrap_or_else(|e| keinonto_cli::fatal(&e));

    let result = match class {
        Some(class) => match witnesses.nominative() {
            Some(lemma) => generator.add_word_with_class(lemma, class, gradation, &witnesses),
            None => keinonto_cli::fatal("witness file has no nominative_singular"),
        },
        None => generator.add_word(&witnesses),
    };
    let entry = result.unwrap_or_else(|e| keinonto_cli::fatal(&e.to_string()));

    keinonto_cli::save_generator(&generator, &db).unwrap_or_else(|e| keinonto_cli::fatal(&e));

    print!("Added '{}': class {}", entry.lemma, entry.class);
    if !entry.gradation.is_none() {
        print!(", gradation {}", entry.gradation);
    }
    println!();
    if !entry.is_regular() {
        println!(
            "  {} stem override(s), {} form override(s)",
            entry.stems.iter().count(),
            entry.forms.len()
        );
    }
}
