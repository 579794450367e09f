//! Immutable demo dataset
//!
//! All entities are created once from this module at store construction.
//! Nothing here is ever mutated; user-driven changes live in the override
//! maps of [`crate::store::WorkflowStore`] and are merged at read time.

use chrono::{DateTime, TimeZone, Utc};
use emend_domain::{
    ActivityEntry, ActivityKind, ContentType, CopyEditStatus, CopyEditorAssignment,
    CopyEditorProfile, FileVersion, Recommendation, Review, ReviewerAssignment, ReviewerProfile,
    ReviewerStatus, Submission, SubmissionStatus,
};

/// The demo identity owning the author-role submissions.
pub const DEMO_AUTHOR: &str = "Jane Doe";

/// The full seed dataset: submissions plus the reviewer and copy-editor
/// identity pools.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedData {
    pub submissions: Vec<Submission>,
    pub reviewer_pool: Vec<ReviewerProfile>,
    pub copy_editor_pool: Vec<CopyEditorProfile>,
}

impl SeedData {
    /// Look up a submission by id.
    pub fn submission(&self, id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    /// Look up a reviewer profile by pool id.
    pub fn reviewer(&self, id: &str) -> Option<&ReviewerProfile> {
        self.reviewer_pool.iter().find(|r| r.id == id)
    }

    /// Look up a copy-editor profile by pool id.
    pub fn copy_editor(&self, id: &str) -> Option<&CopyEditorProfile> {
        self.copy_editor_pool.iter().find(|c| c.id == id)
    }
}

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0)
        .single()
        .expect("valid seed timestamp")
}

fn reviewer(id: &str, name: &str, email: &str, affiliation: &str, expertise: &[&str]) -> ReviewerProfile {
    ReviewerProfile {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        affiliation: Some(affiliation.to_string()),
        expertise: expertise.iter().map(|e| e.to_string()).collect(),
    }
}

fn copy_editor(id: &str, name: &str, email: &str) -> CopyEditorProfile {
    CopyEditorProfile {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn stage_entry(date: DateTime<Utc>, description: &str) -> ActivityEntry {
    ActivityEntry::at(date, description).with_kind(ActivityKind::StageChange)
}

/// Build the seed dataset.
pub fn seed_data() -> SeedData {
    let reviewer_pool = vec![
        reviewer(
            "rev-001",
            "Dr. Priya Raman",
            "p.raman@stellar.edu",
            "Stellar Institute",
            &["galactic dynamics", "n-body simulation"],
        ),
        reviewer(
            "rev-002",
            "Prof. Marcus Webb",
            "mwebb@northfield.edu",
            "Northfield University",
            &["radiative transfer", "spectroscopy"],
        ),
        reviewer(
            "rev-003",
            "Dr. Sofia Lindgren",
            "sofia.lindgren@kva.se",
            "Uppsala Observatory",
            &["exoplanets", "transit photometry"],
        ),
        reviewer(
            "rev-004",
            "Dr. Ahmed El-Sayed",
            "a.elsayed@cairo-obs.eg",
            "Cairo Observatory",
            &["cosmology", "large-scale structure"],
        ),
        reviewer(
            "rev-005",
            "Prof. Helena Vogt",
            "hvogt@mpia.de",
            "MPIA Heidelberg",
            &["star formation", "interstellar medium"],
        ),
        reviewer(
            "rev-006",
            "Dr. Tomás Herrera",
            "therrera@uchile.cl",
            "Universidad de Chile",
            &["galactic dynamics", "stellar streams"],
        ),
        reviewer(
            "rev-007",
            "Dr. Grace Otieno",
            "g.otieno@saao.ac.za",
            "SAAO Cape Town",
            &["variable stars", "time-domain surveys"],
        ),
        reviewer(
            "rev-008",
            "Prof. Kenji Morita",
            "morita@naoj.jp",
            "NAOJ Mitaka",
            &["instrumentation", "adaptive optics"],
        ),
    ];

    let copy_editor_pool = vec![
        copy_editor("ce-001", "Casey Whitfield", "c.whitfield@journal.example"),
        copy_editor("ce-002", "Rosa Delgado", "r.delgado@journal.example"),
        copy_editor("ce-003", "Sam Pruitt", "s.pruitt@journal.example"),
    ];

    // Seed assignments copy their profiles out of the pools, the same way
    // the store does at assignment time.
    let rev = |id: &str| -> ReviewerProfile {
        reviewer_pool
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .expect("seed reviewer exists")
    };
    let ce = |id: &str| -> CopyEditorProfile {
        copy_editor_pool
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .expect("seed copy editor exists")
    };

    let submissions = vec![
        Submission {
            id: "2024-029".to_string(),
            title: "A Catalogue of Eclipsing Binaries from the Meridian Survey".to_string(),
            abstract_text: "We present 412 newly identified eclipsing binary systems drawn \
                            from three years of Meridian Survey photometry."
                .to_string(),
            author_name: "Lucas Novak".to_string(),
            author_email: "l.novak@brno-astro.cz".to_string(),
            author_affiliation: Some("Brno Institute of Astronomy".to_string()),
            status: SubmissionStatus::ReadyForProduction,
            content_type: ContentType::ResearchArticle,
            current_version: 3,
            submitted_date: day(2024, 1, 8),
            assigned_reviewers: vec![
                ReviewerAssignment {
                    reviewer: rev("rev-007"),
                    status: ReviewerStatus::Submitted,
                    assigned_date: day(2024, 1, 15),
                    submitted_date: Some(day(2024, 2, 10)),
                    review: Some(Review {
                        released_to_author: true,
                        released_date: Some(day(2024, 2, 12)),
                        ..Review::new(
                            Recommendation::MinorRevisions,
                            "Period folding looks sound; table 4 needs units.",
                            "Please add units to table 4 and clarify the detrending step.",
                        )
                    }),
                },
            ],
            copy_editors: vec![CopyEditorAssignment {
                editor: ce("ce-002"),
                status: CopyEditStatus::Completed,
                assigned_date: day(2024, 3, 1),
                completed_date: Some(day(2024, 3, 20)),
            }],
            editor_name: Some("Dr. Eleanor Park".to_string()),
            editor_notes: None,
            files: vec![
                FileVersion::new("meridian_binaries_v1.docx", 1, "Original submission", day(2024, 1, 8))
                    .with_category("manuscript")
                    .with_uploader("Lucas Novak"),
                FileVersion::new("meridian_binaries_v3.docx", 3, "Copy-edited manuscript", day(2024, 3, 20))
                    .with_category("manuscript")
                    .with_uploader("Rosa Delgado"),
            ],
            activity: vec![
                stage_entry(day(2024, 1, 8), "Submission received"),
                stage_entry(day(2024, 3, 1), "Entered copy editing"),
                ActivityEntry::at(day(2024, 3, 20), "Copy edit completed")
                    .with_actor("Rosa Delgado"),
                stage_entry(day(2024, 3, 21), "Marked ready for production"),
            ],
        },
        Submission {
            id: "2024-030".to_string(),
            title: "Dust Extinction Toward the Inner Bulge Revisited".to_string(),
            abstract_text: "We re-derive the extinction law toward the inner bulge using \
                            combined near-infrared and Gaia photometry."
                .to_string(),
            author_name: DEMO_AUTHOR.to_string(),
            author_email: "jane.doe@example.edu".to_string(),
            author_affiliation: Some("Example University".to_string()),
            status: SubmissionStatus::Submitted,
            content_type: ContentType::ResearchArticle,
            current_version: 1,
            submitted_date: day(2024, 4, 2),
            assigned_reviewers: vec![],
            copy_editors: vec![],
            editor_name: None,
            editor_notes: None,
            files: vec![FileVersion::new(
                "bulge_extinction_v1.docx",
                1,
                "Original submission",
                day(2024, 4, 2),
            )
            .with_category("manuscript")
            .with_uploader(DEMO_AUTHOR)],
            activity: vec![stage_entry(day(2024, 4, 2), "Submission received")],
        },
        Submission {
            id: "2024-031".to_string(),
            title: "On the Stability of Circumbinary Disk Gaps".to_string(),
            abstract_text: "Hydrodynamic simulations of gap-opening in circumbinary disks \
                            across a grid of binary eccentricities."
                .to_string(),
            author_name: "Dr. Wei Chen".to_string(),
            author_email: "wchen@pacific-astro.org".to_string(),
            author_affiliation: Some("Pacific Astrophysics Center".to_string()),
            status: SubmissionStatus::InDeskReview,
            content_type: ContentType::ResearchArticle,
            current_version: 1,
            submitted_date: day(2024, 3, 28),
            assigned_reviewers: vec![],
            copy_editors: vec![],
            editor_name: Some("Dr. Eleanor Park".to_string()),
            editor_notes: Some("Check scope fit before sending out".to_string()),
            files: vec![FileVersion::new(
                "circumbinary_gaps_v1.docx",
                1,
                "Original submission",
                day(2024, 3, 28),
            )
            .with_category("manuscript")
            .with_uploader("Dr. Wei Chen")],
            activity: vec![
                stage_entry(day(2024, 3, 28), "Submission received"),
                stage_entry(day(2024, 3, 30), "Entered desk review"),
            ],
        },
        Submission {
            id: "2024-032".to_string(),
            title: "A Low-Cost Spectrograph for Small Observatories".to_string(),
            abstract_text: "Design and commissioning results for a 3D-printed echelle \
                            spectrograph achieving R~12000 on a 0.5m telescope."
                .to_string(),
            author_name: DEMO_AUTHOR.to_string(),
            author_email: "jane.doe@example.edu".to_string(),
            author_affiliation: Some("Example University".to_string()),
            status: SubmissionStatus::RevisionsRequested,
            content_type: ContentType::CaseStudy,
            current_version: 1,
            submitted_date: day(2024, 2, 14),
            assigned_reviewers: vec![ReviewerAssignment {
                reviewer: rev("rev-008"),
                status: ReviewerStatus::Submitted,
                assigned_date: day(2024, 2, 20),
                submitted_date: Some(day(2024, 3, 12)),
                review: Some(Review {
                    released_to_author: true,
                    released_date: Some(day(2024, 3, 14)),
                    editor_modified_comments: Some(
                        "Please quantify the wavelength-calibration stability and expand \
                         the throughput discussion."
                            .to_string(),
                    ),
                    ..Review::new(
                        Recommendation::MajorRevisions,
                        "Promising instrument but the calibration section is thin.",
                        "Quantify calibration stability; throughput section needs work; \
                         also the figures are ugly.",
                    )
                }),
            }],
            copy_editors: vec![],
            editor_name: Some("Dr. Eleanor Park".to_string()),
            editor_notes: None,
            files: vec![FileVersion::new(
                "spectrograph_v1.docx",
                1,
                "Original submission",
                day(2024, 2, 14),
            )
            .with_category("manuscript")
            .with_uploader(DEMO_AUTHOR)],
            activity: vec![
                stage_entry(day(2024, 2, 14), "Submission received"),
                stage_entry(day(2024, 2, 18), "Entered peer review"),
                ActivityEntry::at(day(2024, 3, 12), "Review submitted by Prof. Kenji Morita")
                    .with_kind(ActivityKind::ReviewEvent),
                stage_entry(day(2024, 3, 14), "Revisions requested"),
            ],
        },
        Submission {
            id: "2024-033".to_string(),
            title: "Archival Light Curves of V1432 Aquilae".to_string(),
            abstract_text: "A century of archival photographic plates traces the long-term \
                            accretion behaviour of the asynchronous polar V1432 Aql."
                .to_string(),
            author_name: "Dr. Amara Okafor".to_string(),
            author_email: "a.okafor@lagos-obs.ng".to_string(),
            author_affiliation: Some("Lagos Observatory".to_string()),
            status: SubmissionStatus::InCopyEditing,
            content_type: ContentType::ResearchArticle,
            current_version: 2,
            submitted_date: day(2024, 1, 22),
            assigned_reviewers: vec![ReviewerAssignment {
                reviewer: rev("rev-007"),
                status: ReviewerStatus::Submitted,
                assigned_date: day(2024, 1, 29),
                submitted_date: Some(day(2024, 2, 22)),
                review: Some(Review {
                    released_to_author: true,
                    released_date: Some(day(2024, 2, 24)),
                    ..Review::new(
                        Recommendation::Accept,
                        "Careful work, happy to see plate archives used.",
                        "A fine contribution; only typographical fixes needed.",
                    )
                }),
            }],
            copy_editors: vec![CopyEditorAssignment {
                editor: ce("ce-001"),
                status: CopyEditStatus::InProgress,
                assigned_date: day(2024, 3, 4),
                completed_date: None,
            }],
            editor_name: Some("Dr. Eleanor Park".to_string()),
            editor_notes: None,
            files: vec![
                FileVersion::new("v1432_aql_v1.docx", 1, "Original submission", day(2024, 1, 22))
                    .with_category("manuscript")
                    .with_uploader("Dr. Amara Okafor"),
                FileVersion::new("v1432_aql_v2.docx", 2, "Revised manuscript", day(2024, 2, 28))
                    .with_category("manuscript")
                    .with_uploader("Dr. Amara Okafor"),
            ],
            activity: vec![
                stage_entry(day(2024, 1, 22), "Submission received"),
                stage_entry(day(2024, 1, 26), "Entered peer review"),
                ActivityEntry::at(day(2024, 2, 22), "Review submitted by Dr. Grace Otieno")
                    .with_kind(ActivityKind::ReviewEvent),
                stage_entry(day(2024, 3, 4), "Entered copy editing"),
            ],
        },
        Submission {
            id: "2024-034".to_string(),
            title: "Tidal Tails of the Hyades: Evidence from Proper Motions".to_string(),
            abstract_text: "Gaia DR3 proper motions reveal an extended leading tidal tail of \
                            the Hyades cluster out to 400 pc."
                .to_string(),
            author_name: "Dr. Ines Martinez".to_string(),
            author_email: "i.martinez@iac.es".to_string(),
            author_affiliation: Some("IAC Tenerife".to_string()),
            status: SubmissionStatus::InPeerReview,
            content_type: ContentType::ResearchArticle,
            current_version: 1,
            submitted_date: day(2024, 3, 5),
            assigned_reviewers: vec![
                ReviewerAssignment {
                    reviewer: rev("rev-001"),
                    status: ReviewerStatus::Submitted,
                    assigned_date: day(2024, 3, 10),
                    submitted_date: Some(day(2024, 4, 1)),
                    review: Some(Review::new(
                        Recommendation::MinorRevisions,
                        "Solid kinematic selection; contamination estimate is optimistic.",
                        "Please discuss field-star contamination in section 3.",
                    )),
                },
                ReviewerAssignment::new(
                    rev("rev-006"),
                    day(2024, 3, 10),
                ),
            ],
            copy_editors: vec![],
            editor_name: Some("Dr. Eleanor Park".to_string()),
            editor_notes: None,
            files: vec![FileVersion::new(
                "hyades_tails_v1.docx",
                1,
                "Original submission",
                day(2024, 3, 5),
            )
            .with_category("manuscript")
            .with_uploader("Dr. Ines Martinez")],
            activity: vec![
                stage_entry(day(2024, 3, 5), "Submission received"),
                stage_entry(day(2024, 3, 8), "Entered peer review"),
                ActivityEntry::at(day(2024, 3, 10), "Reviewers assigned")
                    .with_kind(ActivityKind::Assignment),
                ActivityEntry::at(day(2024, 4, 1), "Review submitted by Dr. Priya Raman")
                    .with_kind(ActivityKind::ReviewEvent),
            ],
        },
        Submission {
            id: "2024-035".to_string(),
            title: "Teaching Variable-Star Photometry with Backyard Telescopes".to_string(),
            abstract_text: "A classroom-tested curriculum bringing differential photometry \
                            to undergraduate laboratories."
                .to_string(),
            author_name: DEMO_AUTHOR.to_string(),
            author_email: "jane.doe@example.edu".to_string(),
            author_affiliation: Some("Example University".to_string()),
            status: SubmissionStatus::Published,
            content_type: ContentType::Editorial,
            current_version: 2,
            submitted_date: day(2023, 10, 12),
            assigned_reviewers: vec![ReviewerAssignment {
                reviewer: rev("rev-003"),
                status: ReviewerStatus::Submitted,
                assigned_date: day(2023, 10, 20),
                submitted_date: Some(day(2023, 11, 15)),
                review: Some(Review {
                    released_to_author: true,
                    released_date: Some(day(2023, 11, 18)),
                    ..Review::new(
                        Recommendation::Accept,
                        "Well structured and immediately usable.",
                        "Delightful; consider adding a cloudy-night contingency plan.",
                    )
                }),
            }],
            copy_editors: vec![CopyEditorAssignment {
                editor: ce("ce-003"),
                status: CopyEditStatus::Completed,
                assigned_date: day(2023, 12, 1),
                completed_date: Some(day(2023, 12, 18)),
            }],
            editor_name: Some("Dr. Eleanor Park".to_string()),
            editor_notes: None,
            files: vec![
                FileVersion::new("photometry_curriculum_v2.docx", 2, "Final manuscript", day(2023, 12, 18))
                    .with_category("manuscript")
                    .with_uploader("Sam Pruitt"),
            ],
            activity: vec![
                stage_entry(day(2023, 10, 12), "Submission received"),
                stage_entry(day(2023, 12, 1), "Entered copy editing"),
                stage_entry(day(2024, 1, 5), "Published"),
            ],
        },
        Submission {
            id: "2024-036".to_string(),
            title: "A Novel Interpretation of Redshift Without Expansion".to_string(),
            abstract_text: "We propose that cosmological redshift arises from previously \
                            unmodelled photon fatigue."
                .to_string(),
            author_name: "Victor Hale".to_string(),
            author_email: "vhale@independent.example".to_string(),
            author_affiliation: None,
            status: SubmissionStatus::Rejected,
            content_type: ContentType::LetterToEditor,
            current_version: 1,
            submitted_date: day(2024, 2, 2),
            assigned_reviewers: vec![],
            copy_editors: vec![],
            editor_name: Some("Dr. Eleanor Park".to_string()),
            editor_notes: Some("Tired-light variant, desk rejected".to_string()),
            files: vec![FileVersion::new(
                "redshift_letter_v1.docx",
                1,
                "Original submission",
                day(2024, 2, 2),
            )
            .with_category("manuscript")
            .with_uploader("Victor Hale")],
            activity: vec![
                stage_entry(day(2024, 2, 2), "Submission received"),
                stage_entry(day(2024, 2, 3), "Entered desk review"),
                stage_entry(day(2024, 2, 6), "Rejected"),
            ],
        },
    ];

    SeedData {
        submissions,
        reviewer_pool,
        copy_editor_pool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_deterministic_in_shape() {
        let a = seed_data();
        let b = seed_data();
        assert_eq!(a.submissions.len(), b.submissions.len());
        assert_eq!(a.reviewer_pool, b.reviewer_pool);
        assert_eq!(a.copy_editor_pool, b.copy_editor_pool);
    }

    #[test]
    fn scenario_2024_034_shape() {
        let seed = seed_data();
        let s = seed.submission("2024-034").unwrap();
        assert_eq!(s.status, SubmissionStatus::InPeerReview);
        assert_eq!(s.assigned_reviewers.len(), 2);
        assert_eq!(s.assigned_reviewers[0].reviewer.id, "rev-001");
        assert_eq!(s.assigned_reviewers[0].status, ReviewerStatus::Submitted);
        assert_eq!(s.assigned_reviewers[1].reviewer.id, "rev-006");
        assert_eq!(s.assigned_reviewers[1].status, ReviewerStatus::Pending);
        let review = s.assigned_reviewers[0].review.as_ref().unwrap();
        assert!(!review.released_to_author);
    }

    #[test]
    fn demo_author_owns_some_submissions() {
        let seed = seed_data();
        let count = seed
            .submissions
            .iter()
            .filter(|s| s.author_name == DEMO_AUTHOR)
            .count();
        assert!(count >= 2);
    }

    #[test]
    fn pool_ids_are_unique() {
        let seed = seed_data();
        for r in &seed.reviewer_pool {
            assert_eq!(
                seed.reviewer_pool.iter().filter(|p| p.id == r.id).count(),
                1
            );
        }
    }
}
