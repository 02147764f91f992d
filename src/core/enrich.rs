use rand::Rng;

/// Education levels assigned to fetched profiles
///
/// The remote source carries no education data; profiles are enriched from
/// this fixed list as a placeholder.
pub const EDUCATION_LEVELS: &[&str] = &[
    "Bachelor's Degree",
    "Master's Degree",
    "PhD",
    "High School",
    "Diploma",
    "Professional Certificate",
    "MBA",
];

/// Professions assigned to fetched profiles, same placeholder scheme
pub const PROFESSIONS: &[&str] = &[
    "Software Engineer",
    "Doctor",
    "Teacher",
    "Business Analyst",
    "Marketing Manager",
    "Consultant",
    "Designer",
    "Lawyer",
];

/// Strategy for choosing an enrichment attribute from a candidate list
///
/// Injectable so tests can substitute a deterministic picker.
pub trait AttributePicker: Send + Sync {
    fn pick<'a>(&self, choices: &'a [&'a str]) -> &'a str;
}

/// Production picker backed by the thread-local RNG
pub struct RandomPicker;

impl AttributePicker for RandomPicker {
    fn pick<'a>(&self, choices: &'a [&'a str]) -> &'a str {
        let index = rand::thread_rng().gen_range(0..choices.len());
        choices[index]
    }
}
