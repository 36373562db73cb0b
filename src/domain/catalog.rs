//! Fixed lookup tables for chart generation
//!
//! Level-indexed tables carry an explicit fallback entry instead of relying on
//! out-of-range lookups.

use crate::domain::entities::{Headcount, JobFunction};

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Susan", "Richard", "Jessica", "Joseph", "Sarah", "Thomas", "Karen",
    "Charles", "Nancy", "Christopher", "Lisa", "Daniel", "Margaret", "Matthew", "Betty",
    "Anthony", "Sandra", "Mark", "Ashley", "Donald", "Kimberly", "Steven", "Emily", "Paul",
    "Donna", "Andrew", "Michelle", "Joshua", "Dorothy",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

pub const DEPARTMENTS: &[&str] = &[
    "Marketing",
    "Sales",
    "Engineering",
    "Product",
    "Operations",
    "Finance",
    "Human Resources",
    "Legal",
    "Customer Success",
    "Research",
    "Development",
    "Strategy",
    "Business Development",
    "Quality Assurance",
    "Information Technology",
];

/// Job function catalog, ordered by id.
pub const JOB_FUNCTIONS: &[(u32, &str)] = &[
    (1, "Administration"),
    (2, "Logistics and Fulfillment"),
    (3, "Business and Financial Operations"),
    (4, "Communications"),
    (5, "Clinical Affairs"),
    (6, "Marketing"),
    (7, "Analytics"),
    (8, "Medical and Regulatory Affairs"),
    (9, "Legal and Compliance"),
    (10, "Sales"),
    (11, "Customer Success"),
    (12, "Supply Chain"),
    (13, "Manufacturing and Maintenance"),
    (14, "Engineering and Science"),
    (15, "Environmental Health and Safety"),
    (16, "Facilities"),
    (17, "Human Resources"),
    (18, "Healthcare Provision - Patient Facing Clinical"),
    (19, "Healthcare Provision - Non-Patient Facing Clinical"),
    (20, "Information Technology"),
];

/// Job function assigned to departments missing from [`DEPARTMENT_JOB_FUNCTIONS`].
pub const DEFAULT_JOB_FUNCTION_ID: u32 = 1;

pub const DEPARTMENT_JOB_FUNCTIONS: &[(&str, u32)] = &[
    ("Marketing", 6),
    ("Sales", 10),
    ("Engineering", 14),
    ("Product", 14),
    ("Operations", 12),
    ("Finance", 3),
    ("Human Resources", 17),
    ("Legal", 9),
    ("Customer Success", 11),
    ("Research", 14),
    ("Development", 14),
    ("Strategy", 3),
    ("Business Development", 3),
    ("Quality Assurance", 15),
    ("Information Technology", 20),
];

pub const TITLES_BY_LEVEL: &[&[&str]] = &[
    &["Chief Executive Officer (CEO)"],
    &[
        "Chief Operating Officer (COO)",
        "Chief Financial Officer (CFO)",
        "Chief Technology Officer (CTO)",
        "Chief Marketing Officer (CMO)",
        "Chief Human Resources Officer (CHRO)",
    ],
    &[
        "VP of Engineering",
        "VP of Sales",
        "VP of Marketing",
        "VP of Operations",
        "VP of Product",
        "VP of Finance",
    ],
    &["Senior Director", "Executive Director", "Director"],
    &["Senior Manager", "Manager", "Product Manager", "Engineering Manager"],
    &["Team Lead", "Technical Lead", "Project Lead"],
    &["Senior Engineer", "Senior Developer", "Principal Analyst"],
    &["Associate Engineer", "Coordinator", "Analyst", "Staff Member"],
    &["Junior Staff", "Assistant", "Intern"],
];

/// Title used for levels deeper than [`TITLES_BY_LEVEL`].
pub const DEFAULT_TITLES: &[&str] = &["Employee"];

/// Levels at or above this tier hold a single filled seat.
pub const FIXED_HEADCOUNT_MAX_LEVEL: usize = 1;

/// Exclusive upper bounds `(active, inactive, open)` per level.
pub const HEADCOUNT_RANGES: &[(usize, HeadcountRange)] = &[
    (2, HeadcountRange::new(2, 1, 0)),
    (3, HeadcountRange::new(5, 1, 1)),
    (4, HeadcountRange::new(10, 2, 1)),
    (5, HeadcountRange::new(15, 3, 2)),
    (6, HeadcountRange::new(20, 4, 3)),
    (7, HeadcountRange::new(30, 5, 5)),
    (8, HeadcountRange::new(40, 8, 6)),
];

pub const DEFAULT_HEADCOUNT_RANGE: HeadcountRange = HeadcountRange::new(5, 1, 0);

/// Deepest level still counted as managerial.
pub const MANAGERIAL_MAX_LEVEL: usize = 5;

/// Exclusive upper bounds for the three headcount components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadcountRange {
    pub active: u32,
    pub inactive: u32,
    pub open: u32,
}

impl HeadcountRange {
    pub const fn new(active: u32, inactive: u32, open: u32) -> Self {
        Self {
            active,
            inactive,
            open,
        }
    }
}

/// Titles available at `level`, falling back to [`DEFAULT_TITLES`].
pub fn titles_for_level(level: usize) -> &'static [&'static str] {
    TITLES_BY_LEVEL.get(level).copied().unwrap_or(DEFAULT_TITLES)
}

/// Headcount range for `level`, or `None` when the level holds a fixed seat.
pub fn headcount_range_for_level(level: usize) -> Option<HeadcountRange> {
    if level <= FIXED_HEADCOUNT_MAX_LEVEL {
        return None;
    }
    let range = HEADCOUNT_RANGES
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, r)| *r)
        .unwrap_or(DEFAULT_HEADCOUNT_RANGE);
    Some(range)
}

pub fn job_function_id_for_department(department: &str) -> u32 {
    DEPARTMENT_JOB_FUNCTIONS
        .iter()
        .find(|(dept, _)| *dept == department)
        .map(|(_, id)| *id)
        .unwrap_or(DEFAULT_JOB_FUNCTION_ID)
}

/// Resolve the job function for a department.
///
/// Unmapped departments get the default function (`Administration`).
pub fn job_function_for_department(department: &str) -> JobFunction {
    let id = job_function_id_for_department(department);
    let name = JOB_FUNCTIONS
        .iter()
        .find(|(fid, _)| *fid == id)
        .map(|(_, name)| *name)
        .unwrap_or("Administration");
    JobFunction {
        job_function_id: id,
        function: name.to_string(),
    }
}

pub fn is_managerial(level: usize) -> bool {
    level <= MANAGERIAL_MAX_LEVEL
}

/// Headcount of a single filled seat.
pub fn fixed_headcount() -> Headcount {
    Headcount::new(1, 0, 0)
}
