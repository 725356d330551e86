// Sample table for eyeballing the pronunciation heuristic
// Run with: cargo run --bin pronounce_samples
use pronounce_core::generate_pronunciation;

fn main() {
    let samples = [
        "a", "ka", "kai", "gau", "amma", "appa", "nanu", "neenu", "namaskara",
        "dhanyavadagalu", "shubha", "khushi", "oota", "nanu neenu", "hegiddeera",
    ];
    for transliteration in samples.iter() {
        println!("{} => {}", transliteration, generate_pronunciation(transliteration));
    }
}
