//! Built-in demonstration content.
//!
//! Served in place of live data for the resources that degrade instead of
//! failing, when [`ClientConfig::degrade_to_sample_data`] is set.
//!
//! [`ClientConfig::degrade_to_sample_data`]: crate::ClientConfig

use crate::about::{DEFAULT_ABOUT_TITLE, DEFAULT_VALUES_TITLE};
use crate::normalize::{DEFAULT_SALARY, NOT_SPECIFIED};
use crate::{
    AboutUs, Achievement, Bid, BidDocument, CoreValue, HistoryMilestone,
    ItemId, Partner, SeoMeta, TeamMember, Vacancy,
};

const PROCUREMENT_CONTACT: &str = "Director, Procurement Directorate";
const PROCUREMENT_EMAIL: &str = "procurement@era.gov.et";
const PROCUREMENT_PHONE: &str = "+251 11 551 7170";

struct SampleBid {
    id: &'static str,
    title: &'static str,
    category: &'static str,
    bid_type: &'static str,
    status: &'static str,
    publish_date: &'static str,
    deadline_date: &'static str,
    budget: &'static str,
    funding_source: &'static str,
    documents: &'static [(&'static str, &'static str, &'static str)],
    description: &'static str,
    eligibility: &'static [&'static str],
    award: Option<Award>,
}

enum Award {
    Awarded {
        to: &'static str,
        date: &'static str,
        value: &'static str,
    },
    Cancelled {
        reason: &'static str,
    },
}

const INTERNATIONAL: &str = "International Competitive Bidding";
const NATIONAL: &str = "National Competitive Bidding";

const SAMPLE_BIDS: &[SampleBid] = &[
    SampleBid {
        id: "ICB-2025-01",
        title: "Design and Construction of Adama-Awash Expressway (90km)",
        category: "Road Construction",
        bid_type: INTERNATIONAL,
        status: "active",
        publish_date: "March 15, 2025",
        deadline_date: "May 15, 2025",
        budget: "$320 million",
        funding_source: "World Bank",
        documents: &[
            ("Bid Document", "4.2 MB", "pdf"),
            ("Technical Specifications", "8.7 MB", "pdf"),
            ("Drawings Package", "15.3 MB", "zip"),
            ("Addendum No.1", "1.2 MB", "pdf"),
        ],
        description: "The Ethiopian Roads Administration (ERA) invites sealed \
            bids from eligible bidders for the Design and Construction of \
            Adama-Awash Expressway. This project involves the design and \
            construction of a 90km expressway connecting Adama and Awash, \
            including bridges, interchanges, and service areas.",
        eligibility: &[
            "International contractors with experience in expressway \
             construction",
            "Minimum average annual construction turnover of $100 million",
            "Experience in at least two similar projects in the last 10 years",
            "Bid security of $3 million required",
        ],
        award: None,
    },
    SampleBid {
        id: "NCB-2025-03",
        title: "Rehabilitation of Nekemte-Bure Road (120km)",
        category: "Road Rehabilitation",
        bid_type: NATIONAL,
        status: "active",
        publish_date: "April 5, 2025",
        deadline_date: "May 20, 2025",
        budget: "ETB 1.5 billion",
        funding_source: "Government of Ethiopia",
        documents: &[
            ("Bid Document", "3.8 MB", "pdf"),
            ("Technical Specifications", "6.2 MB", "pdf"),
            ("Bill of Quantities", "2.1 MB", "xlsx"),
        ],
        description: "The Ethiopian Roads Administration (ERA) invites sealed \
            bids from eligible bidders for the Rehabilitation of Nekemte-Bure \
            Road. This project involves the rehabilitation of a 120km road \
            section including drainage structures, bridges, and roadside \
            facilities.",
        eligibility: &[
            "Category 1 licensed road contractors registered in Ethiopia",
            "Minimum average annual construction turnover of ETB 500 million",
            "Experience in at least two similar rehabilitation projects in \
             the last 5 years",
            "Bid security of ETB 15 million required",
        ],
        award: None,
    },
    SampleBid {
        id: "ICB-2025-02",
        title: "Construction Supervision for Dire Dawa-Dewele Road Project \
                (220km)",
        category: "Consultancy Services",
        bid_type: INTERNATIONAL,
        status: "active",
        publish_date: "April 10, 2025",
        deadline_date: "June 10, 2025",
        budget: "$5.2 million",
        funding_source: "African Development Bank",
        documents: &[
            ("Request for Proposals", "2.9 MB", "pdf"),
            ("Terms of Reference", "1.8 MB", "pdf"),
        ],
        description: "The Ethiopian Roads Administration (ERA) invites \
            proposals from eligible consulting firms for Construction \
            Supervision Services for the Dire Dawa-Dewele Road Project. The \
            assignment includes supervision of construction works, quality \
            control, contract administration, and environmental monitoring.",
        eligibility: &[
            "International consulting firms with experience in road \
             construction supervision",
            "Minimum average annual turnover of $2 million",
            "Experience in at least three similar supervision assignments in \
             the last 10 years",
            "Proposal security of $50,000 required",
        ],
        award: None,
    },
    SampleBid {
        id: "NCB-2025-04",
        title: "Supply of Road Maintenance Equipment",
        category: "Goods",
        bid_type: NATIONAL,
        status: "active",
        publish_date: "April 20, 2025",
        deadline_date: "May 25, 2025",
        budget: "ETB 120 million",
        funding_source: "Government of Ethiopia",
        documents: &[
            ("Bid Document", "2.4 MB", "pdf"),
            ("Technical Specifications", "1.5 MB", "pdf"),
        ],
        description: "The Ethiopian Roads Administration (ERA) invites sealed \
            bids from eligible suppliers for the Supply of Road Maintenance \
            Equipment including motor graders, wheel loaders, excavators, and \
            rollers. The equipment will be used for routine and periodic \
            maintenance of federal roads.",
        eligibility: &[
            "Licensed suppliers registered in Ethiopia",
            "Minimum average annual turnover of ETB 60 million",
            "Experience in supplying similar equipment in the last 3 years",
            "Bid security of ETB 1.2 million required",
            "Must provide after-sales service and spare parts availability",
        ],
        award: None,
    },
    SampleBid {
        id: "ICB-2024-09",
        title: "Upgrading of Jimma-Bonga Road (120km)",
        category: "Road Construction",
        bid_type: INTERNATIONAL,
        status: "closed",
        publish_date: "October 15, 2024",
        deadline_date: "December 15, 2024",
        budget: "$85 million",
        funding_source: "European Investment Bank",
        documents: &[
            ("Bid Document", "3.5 MB", "pdf"),
            ("Technical Specifications", "7.2 MB", "pdf"),
            ("Drawings Package", "12.8 MB", "zip"),
        ],
        description: "The Ethiopian Roads Administration (ERA) invited sealed \
            bids for the Upgrading of Jimma-Bonga Road. The project involved \
            upgrading a 120km gravel road to asphalt concrete standard, \
            including bridges and drainage structures.",
        eligibility: &[
            "International contractors with experience in road construction",
            "Minimum average annual construction turnover of $40 million",
            "Experience in at least two similar projects in the last 7 years",
            "Bid security of $1.5 million required",
        ],
        award: Some(Award::Awarded {
            to: "Global Road Builders Consortium",
            date: "January 15, 2025",
            value: "$82.3 million",
        }),
    },
    SampleBid {
        id: "NCB-2024-12",
        title: "Routine Maintenance of Addis Ababa-Ambo Road (110km)",
        category: "Road Maintenance",
        bid_type: NATIONAL,
        status: "closed",
        publish_date: "November 5, 2024",
        deadline_date: "December 5, 2024",
        budget: "ETB 45 million",
        funding_source: "Government of Ethiopia",
        documents: &[
            ("Bid Document", "2.6 MB", "pdf"),
            ("Technical Specifications", "3.1 MB", "pdf"),
            ("Bill of Quantities", "1.4 MB", "xlsx"),
        ],
        description: "The Ethiopian Roads Administration (ERA) invited sealed \
            bids for Routine Maintenance of Addis Ababa-Ambo Road. The project \
            involved pothole patching, drainage cleaning, shoulder repairs, \
            and other routine maintenance activities.",
        eligibility: &[
            "Category 3 or higher licensed road contractors registered in \
             Ethiopia",
            "Minimum average annual turnover of ETB 20 million",
            "Experience in at least two similar maintenance projects in the \
             last 3 years",
            "Bid security of ETB 450,000 required",
        ],
        award: Some(Award::Cancelled {
            reason: "Re-evaluation of maintenance strategy required",
        }),
    },
    SampleBid {
        id: "ICB-2024-10",
        title: "Construction of Bridges on Modjo-Hawassa Expressway",
        category: "Bridge Construction",
        bid_type: INTERNATIONAL,
        status: "closed",
        publish_date: "October 20, 2024",
        deadline_date: "December 20, 2024",
        budget: "$28 million",
        funding_source: "African Development Bank",
        documents: &[
            ("Bid Document", "3.2 MB", "pdf"),
            ("Technical Specifications", "5.8 MB", "pdf"),
            ("Drawings Package", "9.5 MB", "zip"),
        ],
        description: "The Ethiopian Roads Administration (ERA) invited sealed \
            bids for the Construction of Bridges on Modjo-Hawassa Expressway. \
            The project involved the construction of 5 major bridges \
            including approach roads and associated works.",
        eligibility: &[
            "International contractors with experience in bridge construction",
            "Minimum average annual construction turnover of $15 million",
            "Experience in at least two similar bridge projects in the last 7 \
             years",
            "Bid security of $500,000 required",
        ],
        award: Some(Award::Awarded {
            to: "Ethiopian-Korean Joint Venture",
            date: "January 25, 2025",
            value: "$26.8 million",
        }),
    },
];

impl SampleBid {
    fn to_bid(&self) -> Bid {
        let (award_status, awarded_to, award_date, contract_value, reason) =
            match &self.award {
                None => (None, None, None, None, None),
                Some(Award::Awarded { to, date, value }) => (
                    Some("awarded"),
                    Some(*to),
                    Some(*date),
                    Some(*value),
                    None,
                ),
                Some(Award::Cancelled { reason }) => {
                    (Some("cancelled"), None, None, None, Some(*reason))
                }
            };
        let owned = |v: Option<&str>| v.map(str::to_string);

        Bid {
            id: ItemId::from(self.id),
            bid_number: Some(self.id.to_string()),
            title: self.title.to_string(),
            category: self.category.to_string(),
            bid_type: self.bid_type.to_string(),
            status: self.status.to_string(),
            publish_date: self.publish_date.to_string(),
            deadline_date: self.deadline_date.to_string(),
            budget: self.budget.to_string(),
            funding_source: self.funding_source.to_string(),
            description: self.description.to_string(),
            eligibility: strings(self.eligibility),
            contact_person: Some(PROCUREMENT_CONTACT.to_string()),
            contact_email: Some(PROCUREMENT_EMAIL.to_string()),
            contact_phone: Some(PROCUREMENT_PHONE.to_string()),
            award_status: owned(award_status),
            awarded_to: owned(awarded_to),
            award_date: owned(award_date),
            contract_value: owned(contract_value),
            cancellation_reason: owned(reason),
            documents: self
                .documents
                .iter()
                .map(|(name, size, file_type)| BidDocument {
                    id: None,
                    name: name.to_string(),
                    size: Some(size.to_string()),
                    file_type: Some(file_type.to_string()),
                    url: None,
                })
                .collect(),
        }
    }
}

/// The full demonstration tender list: four active, three closed.
pub fn sample_bids() -> Vec<Bid> {
    SAMPLE_BIDS.iter().map(SampleBid::to_bid).collect()
}

/// Demonstration tenders with the given status ("active" or "closed").
pub fn sample_bids_with_status(status: &str) -> Vec<Bid> {
    sample_bids()
        .into_iter()
        .filter(|bid| bid.status == status)
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demonstration job openings.
pub fn sample_vacancies() -> Vec<Vacancy> {
    vec![
        Vacancy {
            id: ItemId::from("sample-1"),
            title: "Senior Highway Engineer".into(),
            department: "Engineering and Design".into(),
            location: "Addis Ababa".into(),
            job_type: "Full-Time".into(),
            deadline: "June 30, 2025".into(),
            posted_date: "May 1, 2025".into(),
            description: "Lead the geometric and pavement design of federal \
                highway projects and review consultant submissions."
                .into(),
            requirements: strings(&[
                "BSc or MSc in Civil Engineering",
                "At least 8 years of highway design experience",
                "Proficiency in road design software",
            ]),
            responsibilities: strings(&[
                "Prepare and review highway design reports",
                "Coordinate with design consultants",
                "Ensure compliance with ERA design standards",
            ]),
            benefits: strings(&[
                "Medical insurance",
                "Pension contribution",
                "Professional development support",
            ]),
            salary: DEFAULT_SALARY.into(),
        },
        Vacancy {
            id: ItemId::from("sample-2"),
            title: "Materials Laboratory Technician".into(),
            department: "Quality Control".into(),
            location: "Adama".into(),
            job_type: "Full-Time".into(),
            deadline: "June 15, 2025".into(),
            posted_date: "May 5, 2025".into(),
            description: "Carry out soil, aggregate and asphalt testing for \
                road construction projects in the Adama district."
                .into(),
            requirements: strings(&[
                "Diploma in Civil Engineering or Laboratory Technology",
                "At least 3 years of materials testing experience",
            ]),
            responsibilities: strings(&[
                "Perform field and laboratory tests",
                "Record and report test results",
            ]),
            benefits: strings(&["Medical insurance", "Field allowance"]),
            salary: DEFAULT_SALARY.into(),
        },
        Vacancy {
            id: ItemId::from("sample-3"),
            title: "Environmental and Social Safeguards Specialist".into(),
            department: "Environment and Social Development".into(),
            location: "Hawassa".into(),
            job_type: "Contract".into(),
            deadline: "July 10, 2025".into(),
            posted_date: "May 12, 2025".into(),
            description: "Monitor environmental and social safeguards on \
                donor-financed road projects in the southern districts."
                .into(),
            requirements: strings(&[
                "MSc in Environmental Science or related field",
                "At least 5 years of safeguards experience",
            ]),
            responsibilities: strings(&[
                "Review environmental and social management plans",
                "Conduct site monitoring visits",
                "Prepare quarterly safeguards reports",
            ]),
            benefits: strings(&["Medical insurance"]),
            salary: NOT_SPECIFIED.into(),
        },
    ]
}

/// Organisation profile used when the About content cannot be loaded.
///
/// Image paths point at assets bundled with the site itself, so they are
/// left relative.
pub fn fallback_about() -> AboutUs {
    AboutUs {
        title: DEFAULT_ABOUT_TITLE.into(),
        subtitle: "Connecting Ethiopia through sustainable road \
            infrastructure development and maintenance."
            .into(),
        description: "The Ethiopian Roads Administration (ERA) is \
            responsible for the development and maintenance of the country's \
            road network, ensuring connectivity and accessibility across \
            Ethiopia."
            .into(),
        mission: "To develop and maintain a safe, efficient, and sustainable \
            road network that connects all regions of Ethiopia and supports \
            economic growth and social development."
            .into(),
        vision: "To create a world-class road network that facilitates \
            Ethiopia's transformation into a middle-income country by \
            providing reliable connectivity to all citizens."
            .into(),
        values_title: DEFAULT_VALUES_TITLE.into(),
        values: [
            (
                "Excellence",
                "Striving for the highest standards in all our work",
            ),
            (
                "Integrity",
                "Acting with honesty, transparency, and accountability",
            ),
            (
                "Innovation",
                "Embracing new technologies and approaches to improve our \
                 road infrastructure",
            ),
            (
                "Sustainability",
                "Developing road infrastructure that is environmentally and \
                 economically sustainable",
            ),
        ]
        .into_iter()
        .map(|(title, description)| CoreValue {
            title: title.into(),
            description: Some(description.into()),
        })
        .collect(),
        history: "The Ethiopian Roads Administration was established to \
            oversee the development and maintenance of Ethiopia's road \
            network, which is crucial for the country's economic and social \
            development."
            .into(),
        team_description: "Our leadership team is composed of experienced \
            professionals dedicated to the development of Ethiopia's road \
            infrastructure."
            .into(),
        team_members: vec![TeamMember {
            name: "Habtamu Tegegne".into(),
            position: "Director General".into(),
            bio: "Leading the Ethiopian Roads Administration with over 20 \
                years of experience in infrastructure development."
                .into(),
            image_url: Some("/images/team/director-general.jpg".into()),
        }],
        achievements_description: "Over the years, ERA has achieved \
            significant milestones in expanding and improving Ethiopia's road \
            network."
            .into(),
        achievements: vec![
            Achievement {
                title: "Expanded Road Network".into(),
                description: "Increased the total road network by over 30% \
                    in the last decade."
                    .into(),
            },
            Achievement {
                title: "Improved Road Quality".into(),
                description: "Upgraded over 5,000 km of roads to meet \
                    international standards."
                    .into(),
            },
        ],
        milestones_description: "Key milestones in the development of \
            Ethiopia's road infrastructure."
            .into(),
        milestones: vec![
            HistoryMilestone {
                year: "2010".into(),
                title: "Road Sector Development Program".into(),
                description: "Launched a comprehensive program to expand and \
                    improve the road network."
                    .into(),
            },
            HistoryMilestone {
                year: "2015".into(),
                title: "Rural Access Improvement".into(),
                description: "Initiated a program to improve rural road \
                    access across the country."
                    .into(),
            },
        ],
        partners: vec![Partner {
            name: "World Bank".into(),
            logo_url: Some("/images/partners/world-bank.png".into()),
            description: Some(
                "Supporting road infrastructure development through \
                 financing and technical assistance."
                    .into(),
            ),
        }],
        hero_image_url: Some("/images/hero-image.jpg".into()),
        mission_image_url: Some("/images/mission-image.jpg".into()),
        vision_image_url: Some("/images/vision-image.jpg".into()),
        history_image_url: Some("/images/history-image.jpg".into()),
        org_structure_image_url: Some("/images/org-structure.jpg".into()),
        team_images_urls: strings(&[
            "/images/team/team1.jpg",
            "/images/team/team2.jpg",
        ]),
        meta: SeoMeta {
            title: DEFAULT_ABOUT_TITLE.into(),
            description: "Learn about the Ethiopian Roads Administration, its \
                mission, vision, and achievements in developing Ethiopia's \
                road infrastructure."
                .into(),
            keywords: strings(&[
                "Ethiopian Roads Administration",
                "ERA",
                "road infrastructure",
                "Ethiopia roads",
            ]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_bids_split_by_status() {
        assert_eq!(sample_bids().len(), 7);
        assert_eq!(sample_bids_with_status("active").len(), 4);
        let closed = sample_bids_with_status("closed");
        assert_eq!(closed.len(), 3);
        assert!(closed.iter().all(|bid| bid.award_status.is_some()));
    }

    #[test]
    fn sample_ids_are_unique() {
        let mut ids: Vec<_> = sample_bids().into_iter().map(|b| b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 7);
        assert_eq!(sample_vacancies().len(), 3);
    }
}
