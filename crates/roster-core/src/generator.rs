//! Synthetic employee dataset used to populate a fresh browser.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roster_model::{NewRecord, Position, Record, RecordId};

/// Dataset size used when nothing is configured.
pub const DEFAULT_RECORD_COUNT: usize = 100;

const FIRST_NAMES: [&str; 14] = [
    "An", "Bình", "Cường", "Dũng", "Hải", "Hiếu", "Huy", "Khánh", "Lan", "Minh", "Nam", "Trang",
    "Tuấn", "Vy",
];

const LAST_NAMES: [&str; 9] = [
    "Nguyễn", "Trần", "Lê", "Phạm", "Hoàng", "Vũ", "Đặng", "Bùi", "Đỗ",
];

const BIRTH_YEARS: (i32, i32) = (1980, 2003);
const SALARY_RANGE: std::ops::Range<u64> = 800..3800;

/// Generate `count` records drawing every value, ids included, from `rng`.
pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<Record> {
    (0..count).map(|_| random_record(rng)).collect()
}

/// Reproducible dataset for a given seed.
pub fn generate_seeded(count: usize, seed: u64) -> Vec<Record> {
    generate(count, &mut StdRng::seed_from_u64(seed))
}

/// Dataset seeded from the thread-local generator.
pub fn generate_random(count: usize) -> Vec<Record> {
    generate(count, &mut rand::thread_rng())
}

fn random_record<R: Rng>(rng: &mut R) -> Record {
    let mut id_bytes = [0u8; 16];
    rng.fill(&mut id_bytes);
    NewRecord {
        full_name: random_name(rng),
        date_of_birth: random_date(rng),
        position: Position::ALL[rng.gen_range(0..Position::ALL.len())],
        salary: rng.gen_range(SALARY_RANGE),
    }
    .into_record(RecordId::from_random_bytes(id_bytes))
}

fn random_name<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{last} {first}")
}

fn random_date<R: Rng>(rng: &mut R) -> NaiveDate {
    let (start_year, end_year) = BIRTH_YEARS;
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1).unwrap_or(NaiveDate::MIN);
    let end = NaiveDate::from_ymd_opt(end_year, 12, 31).unwrap_or(NaiveDate::MIN);
    let span = u64::try_from((end - start).num_days()).unwrap_or(0);
    start
        .checked_add_days(Days::new(rng.gen_range(0..=span)))
        .unwrap_or(start)
}
