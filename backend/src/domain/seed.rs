//! Example salesmen loaded into the store at startup.

use super::{Salesman, Sid, SocialPerformanceRecord};

struct SeedSalesman {
    sid: i64,
    firstname: &'static str,
    lastname: &'static str,
    job_title: &'static str,
    sub_unit: &'static str,
    supervisor: &'static str,
    records: [(&'static str, u32); 3],
}

const SEEDS: [SeedSalesman; 3] = [
    SeedSalesman {
        sid: 101,
        firstname: "John",
        lastname: "Doe",
        job_title: "Senior Sales Executive",
        sub_unit: "North Region",
        supervisor: "Michael Smith",
        records: [("Communication", 88), ("Teamwork", 92), ("Negotiation", 85)],
    },
    SeedSalesman {
        sid: 102,
        firstname: "Anna",
        lastname: "Miller",
        job_title: "Sales Associate",
        sub_unit: "West Region",
        supervisor: "Laura Johnson",
        records: [
            ("Customer Relations", 90),
            ("Adaptability", 84),
            ("Organization", 87),
        ],
    },
    SeedSalesman {
        sid: 103,
        firstname: "David",
        lastname: "Brown",
        job_title: "Account Manager",
        sub_unit: "Corporate Sales",
        supervisor: "Robert King",
        records: [
            ("Strategic Thinking", 95),
            ("Leadership", 89),
            ("Problem Solving", 91),
        ],
    },
];

/// Salesmen the service starts with unless seeding is disabled.
#[must_use]
pub fn example_salesmen() -> Vec<Salesman> {
    SEEDS
        .iter()
        .map(|seed| {
            let records = seed
                .records
                .iter()
                .map(|(skill, score)| SocialPerformanceRecord::new(*skill, *score))
                .collect();
            Salesman::new(Sid::new(seed.sid), seed.firstname, seed.lastname)
                .with_job_title(Some(seed.job_title.to_owned()))
                .with_sub_unit(Some(seed.sub_unit.to_owned()))
                .with_supervisor(Some(seed.supervisor.to_owned()))
                .with_records(records)
        })
        .collect()
}
