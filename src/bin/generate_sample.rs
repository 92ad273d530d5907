use anyhow::{Context, Result};
use serde::Serialize;

/// One output row, in the column layout the dashboard reads.
#[derive(Serialize)]
struct Row<'a> {
    date_col: String,
    #[serde(rename = "VOM_CAT")]
    category: &'a str,
    agency_name: &'a str,
    trips_num: u64,
    #[serde(rename = "VRM")]
    vrm: f64,
}

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
}

/// Monthly trips/VRM for one agency: slow trend, summer dip, 2020 drop, noise.
fn monthly_figures(
    base_trips: f64,
    base_vrm: f64,
    year: i32,
    month: u32,
    rng: &mut SimpleRng,
) -> (u64, f64) {
    let years_in = (year - 2010) as f64 + (month - 1) as f64 / 12.0;
    let trend = 1.0 - 0.015 * years_in;
    let season = 1.0 - 0.08 * (((month as f64 - 7.0) / 12.0 * std::f64::consts::TAU).cos());
    let pandemic = if (year == 2020 && month >= 4) || (year == 2021 && month <= 6) {
        0.55
    } else {
        1.0
    };

    let trips = base_trips * trend * season * pandemic * rng.gauss(1.0, 0.03);
    let vrm = base_vrm * (0.95 + 0.05 * pandemic) * rng.gauss(1.0, 0.01);
    (trips.max(0.0).round() as u64, (vrm.max(0.0) * 10.0).round() / 10.0)
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // (grouping, agency, trips per month, VRM per month)
    let agencies = [
        ("50-200 peak vehicles", "City of Tallahassee", 380_000.0, 210_000.0),
        ("50-200 peak vehicles", "Lee County Transit", 290_000.0, 320_000.0),
        ("50-200 peak vehicles", "Space Coast Area Transit", 120_000.0, 250_000.0),
        ("over 200 peak vehicles", "Miami-Dade Transit", 5_600_000.0, 2_400_000.0),
        ("over 200 peak vehicles", "Jacksonville Transportation Authority", 950_000.0, 1_050_000.0),
        ("under 50 peak vehicles", "Bay County Transit", 45_000.0, 95_000.0),
        ("under 50 peak vehicles", "Ocala/Marion County", 30_000.0, 70_000.0),
    ];

    let output_path = "monthly_bus_data_for_visual.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0usize;
    for year in 2010..=2022 {
        for month in 1..=12u32 {
            for &(category, agency_name, base_trips, base_vrm) in &agencies {
                let (trips_num, vrm) = monthly_figures(base_trips, base_vrm, year, month, &mut rng);
                writer
                    .serialize(Row {
                        date_col: format!("{year:04}-{month:02}-01"),
                        category,
                        agency_name,
                        trips_num,
                        vrm,
                    })
                    .context("writing row")?;
                rows += 1;
            }
        }
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {rows} monthly rows for {} agencies to {output_path}",
        agencies.len()
    );
    Ok(())
}
