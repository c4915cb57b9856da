// WASM bindings for pwforge.
//
// Exposes the wordlist engine and password analysis to JavaScript via
// wasm-bindgen. Configurations and reports cross the boundary as plain
// objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   generateWordlist(["rex", "berlin"], { casing: true, years: true });
//   estimateEntropyBits("abc123");            // => 31.02...
//
//   const prefix = hashPrefix("password");    // => "5BAA6"
//   const body = await (await fetch(rangeUrl + prefix)).text();
//   analyzePassword("password", body);        // => { password_length: 8, ... }
//
//   const wl = new WasmWordlist({ leet: true });
//   wl.generate(["summer"]);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use pwforge_analyze::breach::{BreachChecker, BreachError, PREFIX_LEN, sha1_hex, split_hash};
use pwforge_analyze::report::analyze_password;
use pwforge_core::config::WordlistConfig;
use pwforge_wordlist::{WordlistError, WordlistGenerator};

// ============================================================================
// Conversion helpers
// ============================================================================

fn wordlist_error_to_js(e: WordlistError) -> JsError {
    JsError::new(&e.to_string())
}

/// `undefined` and `null` select the default configuration.
fn config_from_js(value: JsValue) -> Result<WordlistConfig, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(WordlistConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Serialize as plain objects (maps become objects, not `Map`).
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// Free functions
// ============================================================================

/// Generate a sorted, deduplicated wordlist from base words.
///
/// `config` is a partial configuration object; missing keys take their
/// defaults.
#[wasm_bindgen(js_name = "generateWordlist")]
pub fn generate_wordlist(inputs: Vec<String>, config: JsValue) -> Result<Vec<String>, JsError> {
    let config = config_from_js(config)?;
    pwforge_wordlist::generate_wordlist(&inputs, &config).map_err(wordlist_error_to_js)
}

/// Character-pool entropy estimate in bits.
#[wasm_bindgen(js_name = "estimateEntropyBits")]
pub fn estimate_entropy_bits(password: &str) -> f64 {
    pwforge_analyze::estimate_entropy_bits(password)
}

/// The hash prefix a caller must fetch the breach range for.
#[wasm_bindgen(js_name = "hashPrefix")]
pub fn hash_prefix(password: &str) -> String {
    let hash = sha1_hex(password);
    split_hash(&hash).0.to_string()
}

/// Analyze a password.
///
/// `range_body` is the range response for `hashPrefix(password)`. When
/// given, the report carries `pwned_count`; a malformed body yields `-1`.
#[wasm_bindgen(js_name = "analyzePassword")]
pub fn analyze(password: &str, range_body: Option<String>) -> Result<JsValue, JsError> {
    let checker = range_body.map(|body| {
        BreachChecker::from_fn(move |prefix: &str| {
            if prefix.len() == PREFIX_LEN {
                Ok(body.clone())
            } else {
                Err(BreachError::Unavailable(format!("bad prefix {prefix}")))
            }
        })
    });
    to_js(&analyze_password(password, checker.as_ref()))
}

// ============================================================================
// WasmWordlist
// ============================================================================

/// A validated wordlist configuration reusable across calls.
#[wasm_bindgen]
pub struct WasmWordlist {
    generator: WordlistGenerator,
}

#[wasm_bindgen]
impl WasmWordlist {
    /// Validate `config` and build a generator. Invalid leet keys, empty
    /// symbols and a zero candidate cap are rejected here.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmWordlist, JsError> {
        let generator =
            WordlistGenerator::new(config_from_js(config)?).map_err(wordlist_error_to_js)?;
        Ok(WasmWordlist { generator })
    }

    pub fn generate(&self, inputs: Vec<String>) -> Result<Vec<String>, JsError> {
        self.generator.generate(&inputs).map_err(wordlist_error_to_js)
    }

    /// Upper bound on the output size for `base_words` inputs.
    #[wasm_bindgen(js_name = "maxOutputSize")]
    pub fn max_output_size(&self, base_words: usize) -> usize {
        self.generator.fan_out().total_bound(base_words)
    }

    /// The effective configuration as a plain object.
    pub fn config(&self) -> Result<JsValue, JsError> {
        to_js(self.generator.config())
    }
}
