//! Generates the Swift and Kotlin bindings for `mediabridge`.

fn main() {
    uniffi::uniffi_bindgen_main();
}
