#![no_main]

use colortally::aggregate::{aggregate_proportions, select_all};
use colortally::dataset::Dataset;
use colortally::hypothesis::chi_square_uniform_colors;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Loading arbitrary bytes must either succeed or return an error, never panic
    if let Ok(dataset) = Dataset::from_csv_reader(data) {
        if let Ok(proportions) = aggregate_proportions(&select_all(&dataset)) {
            let result = chi_square_uniform_colors(&proportions).unwrap();
            assert!(result.p_value >= 0.0 && result.p_value <= 1.0);
        }
    }
});
