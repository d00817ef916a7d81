use chrono::{Duration, NaiveDate};

const OUTPUT_PATH: &str = "listings_syd_sample.csv";

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (name, latitude, longitude, price level)
    let hoods: [(&str, f64, f64, f64); 12] = [
        ("Sydney", -33.8688, 151.2093, 1.4),
        ("Bondi Beach", -33.8908, 151.2743, 1.6),
        ("Manly", -33.7969, 151.2840, 1.5),
        ("Surry Hills", -33.8845, 151.2119, 1.2),
        ("Newtown", -33.8983, 151.1796, 0.9),
        ("Randwick", -33.9173, 151.2313, 1.0),
        ("Coogee", -33.9198, 151.2593, 1.3),
        ("Mosman", -33.8269, 151.2466, 1.7),
        ("Parramatta", -33.8151, 151.0011, 0.7),
        ("Marrickville", -33.9110, 151.1554, 0.8),
        ("Woollahra", -33.8849, 151.2411, 1.8),
        ("Pittwater", -33.6412, 151.3019, 1.9),
    ];

    // (room type, price factor, listings per neighbourhood)
    let room_types: [(&str, f64, usize); 3] = [
        ("Entire home/apt", 1.0, 16),
        ("Private room", 0.45, 9),
        ("Shared room", 0.2, 3),
    ];

    let host_names = [
        "Alice", "Bob", "Chen", "Daria", "Emil", "Freya", "Grace", "Hugo",
    ];
    let adjectives = [
        "Sunny", "Cozy", "Modern", "Charming", "Spacious", "Quiet", "Bright", "Stylish",
    ];
    let nouns = [
        "apartment", "studio", "terrace", "cottage", "loft", "room", "flat", "bungalow",
    ];

    let review_epoch = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap();

    let mut writer = csv::Writer::from_path(OUTPUT_PATH).expect("Failed to create output file");
    writer
        .write_record([
            "id",
            "name",
            "host_id",
            "host_name",
            "neighbourhood_group",
            "neighbourhood",
            "latitude",
            "longitude",
            "room_type",
            "price",
            "minimum_nights",
            "number_of_reviews",
            "last_review",
            "reviews_per_month",
            "calculated_host_listings_count",
            "availability_365",
        ])
        .expect("Failed to write header");

    let mut id: i64 = 10_000;
    let mut rows = 0usize;

    for &(hood, lat, lon, price_level) in &hoods {
        for &(room_type, price_factor, count) in &room_types {
            for _ in 0..count {
                id += 1;

                let name = format!(
                    "{} {} in {}",
                    rng.pick(&adjectives),
                    rng.pick(&nouns),
                    hood
                );
                let host_id = 500 + (rng.next_u64() % 400) as i64;
                let host_name = rng.pick(&host_names);

                let latitude = lat + rng.gauss(0.0, 0.008);
                let longitude = lon + rng.gauss(0.0, 0.008);
                let price = (180.0 * price_level * price_factor
                    * (1.0 + rng.gauss(0.0, 0.35)).abs())
                .round()
                .max(25.0);
                let minimum_nights = 1 + (rng.next_u64() % 6) as i64;

                // Roughly one listing in seven has no reviews yet; those
                // rows get empty review fields, like the real export.
                let reviewed = rng.next_f64() > 0.15;
                let (number_of_reviews, last_review, reviews_per_month) = if reviewed {
                    let n = 1 + (rng.next_u64() % 120);
                    let date = review_epoch + Duration::days((rng.next_f64() * 400.0) as i64);
                    (
                        n.to_string(),
                        date.format("%Y-%m-%d").to_string(),
                        format!("{:.2}", 0.05 + rng.next_f64() * 4.0),
                    )
                } else {
                    ("0".to_string(), String::new(), String::new())
                };

                let record = [
                    id.to_string(),
                    name,
                    host_id.to_string(),
                    host_name.to_string(),
                    String::new(), // neighbourhood_group: empty in the Sydney export
                    hood.to_string(),
                    format!("{latitude:.5}"),
                    format!("{longitude:.5}"),
                    room_type.to_string(),
                    format!("{price}"),
                    minimum_nights.to_string(),
                    number_of_reviews,
                    last_review,
                    reviews_per_month,
                    "1".to_string(),
                    (rng.next_u64() % 366).to_string(),
                ];
                writer.write_record(&record).expect("Failed to write row");
                rows += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {rows} listings across {} neighbourhoods to {OUTPUT_PATH}",
        hoods.len()
    );
}
