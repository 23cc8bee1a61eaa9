use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform sample from [low, high).
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (site, share of launches, payload ceiling in kg)
    let sites: &[(&str, usize, f64)] = &[
        ("CCAFS LC-40", 26, 7000.0),
        ("CCAFS SLC-40", 7, 9600.0),
        ("KSC LC-39A", 13, 9600.0),
        ("VAFB SLC-4E", 10, 4000.0),
    ];

    // Booster generations with rising success probability.
    let boosters: &[(&str, f64)] = &[
        ("v1.0", 0.40),
        ("v1.1", 0.55),
        ("FT", 0.85),
        ("B4", 0.90),
        ("B5", 0.97),
    ];

    let mut all_sites: Vec<String> = Vec::new();
    let mut all_payloads: Vec<f64> = Vec::new();
    let mut all_boosters: Vec<String> = Vec::new();
    let mut all_outcomes: Vec<i64> = Vec::new();

    for &(site, count, payload_cap) in sites {
        for _ in 0..count {
            let (booster, p_success) = boosters[(rng.next_u64() % boosters.len() as u64) as usize];
            let payload = rng.uniform(300.0, payload_cap);
            let outcome = i64::from(rng.next_f64() < p_success);

            all_sites.push(site.to_string());
            all_payloads.push((payload * 10.0).round() / 10.0);
            all_boosters.push(booster.to_string());
            all_outcomes.push(outcome);
        }
    }

    let n_rows = all_sites.len();

    let site_array = StringArray::from(all_sites.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    let payload_array = Float64Array::from(all_payloads);
    let booster_array =
        StringArray::from(all_boosters.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    let outcome_array = Int64Array::from(all_outcomes);

    let schema = Arc::new(Schema::new(vec![
        Field::new("LaunchSite", DataType::Utf8, false),
        Field::new("PayloadMassKG", DataType::Float64, false),
        Field::new("BoosterVersionCategory", DataType::Utf8, false),
        Field::new("Class", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(site_array),
            Arc::new(payload_array),
            Arc::new(booster_array),
            Arc::new(outcome_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let output_path = "sample_launches.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {n_rows} launch records to {output_path}");
}
