use anyhow::{Context, Result};
use encoding_rs::WINDOWS_1252;

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Base price, weight and product line per laptop type.
const TYPES: [(&str, f64, f64); 5] = [
    ("Notebook", 550.0, 2.1),
    ("Ultrabook", 1100.0, 1.3),
    ("Gaming", 1500.0, 2.6),
    ("2 in 1 Convertible", 900.0, 1.5),
    ("Workstation", 1800.0, 2.4),
];

/// Company name, price multiplier, and a product line. "Portégé" keeps a
/// non-ASCII character in the data so the Latin-1 path stays exercised.
const COMPANIES: [(&str, f64, &str); 8] = [
    ("Acer", 0.80, "Aspire"),
    ("Apple", 2.00, "MacBook"),
    ("Asus", 0.95, "ZenBook"),
    ("Dell", 1.10, "Inspiron"),
    ("HP", 1.00, "Pavilion"),
    ("Lenovo", 0.95, "ThinkPad"),
    ("MSI", 1.35, "Raider"),
    ("Toshiba", 1.20, "Portégé"),
];

const RAM_CHOICES: [u32; 4] = [4, 8, 16, 32];
const INCH_CHOICES: [f64; 4] = [13.3, 14.0, 15.6, 17.3];

const CPUS: [&str; 4] = [
    "Intel Core i3 7100U",
    "Intel Core i5 8250U",
    "Intel Core i7 8550U",
    "AMD Ryzen 5 2500U",
];
const GPUS: [&str; 3] = [
    "Intel HD Graphics 620",
    "Nvidia GeForce GTX 1050",
    "AMD Radeon 530",
];
const STORAGE: [&str; 4] = ["256GB SSD", "512GB SSD", "1TB HDD", "128GB SSD + 1TB HDD"];
const OS: [&str; 3] = ["Windows 10", "Linux", "No OS"];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "laptop_ID",
        "Company",
        "Product",
        "TypeName",
        "Inches",
        "ScreenResolution",
        "Cpu",
        "Ram",
        "Memory",
        "Gpu",
        "OpSys",
        "Weight",
        "Price_euros",
    ])?;

    let mut index: u32 = 0;
    for (company, multiplier, line) in COMPANIES {
        for (type_name, base_price, base_weight) in TYPES {
            // Apple sells no gaming rigs; keep the catalogue plausible.
            if company == "Apple" && type_name == "Gaming" {
                continue;
            }

            for _ in 0..2 {
                index += 1;
                let ram = *rng.pick(&RAM_CHOICES);
                let inches = *rng.pick(&INCH_CHOICES);

                let price = (base_price * multiplier
                    + f64::from(ram) * 12.0
                    + rng.gauss(0.0, base_price * 0.15))
                .max(250.0);
                let weight = (base_weight + (inches - 14.0) * 0.18 + rng.gauss(0.0, 0.12))
                    .max(0.8);

                let resolution = if inches > 15.0 {
                    "IPS Panel Full HD 1920x1080"
                } else {
                    "Full HD 1920x1080"
                };

                writer.write_record([
                    index.to_string(),
                    company.to_string(),
                    format!("{line} {}", 100 + (rng.next_u64() % 800)),
                    type_name.to_string(),
                    format!("{inches:.1}"),
                    resolution.to_string(),
                    rng.pick(&CPUS).to_string(),
                    format!("{ram}GB"),
                    rng.pick(&STORAGE).to_string(),
                    rng.pick(&GPUS).to_string(),
                    rng.pick(&OS).to_string(),
                    format!("{weight:.2}kg"),
                    format!("{price:.2}"),
                ])?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV output: {e}"))?;
    let utf8 = String::from_utf8(bytes).context("CSV output was not UTF-8")?;
    // The dashboard expects the file in its original Latin-1 encoding.
    let (encoded, _, _) = WINDOWS_1252.encode(&utf8);

    std::fs::create_dir_all("data")?;
    std::fs::write("data/laptop_price.csv", &encoded)?;
    println!("Wrote {index} laptops to data/laptop_price.csv");

    Ok(())
}
