// src/backend/taxonomy.rs
//
// Static organizational taxonomy backing the dropdown options: each vertical
// carries its exam and subject lists. Modeled as an injected read-only value
// so tests can substitute a smaller table.

/// One vertical with its exam and subject lists.
#[derive(Clone, Debug)]
pub struct VerticalEntry {
    pub name: &'static str,
    pub exams: &'static [&'static str],
    pub subjects: &'static [&'static str],
}

/// Read-only taxonomy lookup table.
#[derive(Clone, Debug)]
pub struct Taxonomy {
    entries: &'static [VerticalEntry],
    content_subcategories: &'static [&'static str],
}

impl Taxonomy {
    pub fn new(
        entries: &'static [VerticalEntry],
        content_subcategories: &'static [&'static str],
    ) -> Self {
        Taxonomy {
            entries,
            content_subcategories,
        }
    }

    /// The production table.
    pub fn builtin() -> Self {
        Taxonomy::new(&MASTER_DATA, CONTENT_SUBCATEGORIES)
    }

    pub fn verticals(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.to_string()).collect()
    }

    /// Exams for a vertical; unknown verticals yield an empty list, never an error.
    pub fn exams_for(&self, vertical: &str) -> Vec<String> {
        self.entry(vertical)
            .map(|e| e.exams.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }

    /// Subjects for a vertical; unknown verticals yield an empty list.
    pub fn subjects_for(&self, vertical: &str) -> Vec<String> {
        self.entry(vertical)
            .map(|e| e.subjects.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }

    pub fn content_subcategories(&self) -> Vec<String> {
        self.content_subcategories
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn entry(&self, vertical: &str) -> Option<&VerticalEntry> {
        self.entries.iter().find(|e| e.name == vertical)
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Taxonomy::builtin()
    }
}

// Sub-categories used when the content type is "Content".
const CONTENT_SUBCATEGORIES: &[&str] = &[
    "Conceptual Insights",
    "Tips & Tricks / Shortcuts",
    "PYQs / Practice Questions",
    "Science / GK Facts",
];

const MASTER_DATA: [VerticalEntry; 12] = [
    VerticalEntry {
        name: "Bank Pre",
        exams: &[
            "SBI Clerk", "SBI PO", "IBPS CLERK", "IBPS PO", "LIC AAO", "RRB PO", "RRB Clerk",
        ],
        subjects: &[
            "All Subjects", "None", "Reasoning", "Quants", "English", "General Awareness",
            "Current Affairs", "Hindi", "Computer",
        ],
    },
    VerticalEntry {
        name: "Bank Post",
        exams: &[
            "JAIIB", "CAIIB", "IIBF CERTIFICATION COURSE", "BANK PROMOTION EXAMS",
        ],
        subjects: &[
            "All Subjects", "None", "AFM", "RBWM", "IEIFS", "PPB", "ABM", "ABFM", "BFM", "BRBL",
            "CAIIB Elective Subjects", "CCP + AML", "Foreign Exchange",
            "Prevention of Cyber Crime", "KYC + IBC + MSME", "General Banking",
            "Computer Knowledge", "Banking Law",
        ],
    },
    VerticalEntry {
        name: "SSC",
        exams: &[
            "GD", "MTS", "CHSL", "CGL", "Delhi Police", "CPO", "Steno", "RRB NTPC", "ALP",
            "Group D", "RPF",
        ],
        subjects: &[
            "All Subjects", "None", "Current Affairs", "English", "GK/GS", "Maths", "Reasoning",
            "Science", "Shorthand",
        ],
    },
    VerticalEntry {
        name: "Teaching",
        exams: &[
            "CTET", "LT Grade", "Bihar STET", "EMRS", "UP GIC", "NVS", "KVS", "HTET",
            "BPSC TRE 4.0", "UP TET", "REET", "DSSSB", "TGT", "PGT", "PRT", "TET Exams", "AWES",
            "SET Exams", "Super TET", "RPSC Teaching Exam", "Sainik School Exams",
            "West Bengal SSC Teacher Recruitment",
        ],
        subjects: &[
            "All Subjects", "None", "English", "Hindi", "Maths", "Sanskrit", "CDP", "EVS",
            "General Studies", "Commerce", "Urdu", "Social Studies", "Science", "Home Science",
            "Music", "Arts", "Social Science", "Physical Education", "Fine Arts", "Physics",
            "Chemistry", "Biology", "Zoology", "History", "Geography", "Political Science",
            "Sociology", "Economics", "Philosophy", "Psychology", "Botany", "Computer Science",
            "GA", "Teaching Aptitude", "Reasoning", "Polity", "Mathematics", "Current Affairs",
            "General Science",
        ],
    },
    VerticalEntry {
        name: "UGC",
        exams: &["Paper 1", "Paper 2", "SET / SLET", "CSIR NET"],
        subjects: &[
            "All Subjects", "None", "General Paper", "Political Science", "Philosophy",
            "Psychology", "Sociology", "History", "Commerce", "Education", "Home Science",
            "Physical Education", "Law", "Music", "Sanskrit", "Geography", "Ayurveda", "Biology",
            "Hindi", "Environmental Sciences", "Computer Science and Applications",
            "Library and Information Science", "Urdu", "English", "Chemical Sciences",
            "Earth Sciences", "Life Sciences", "Mathematical Sciences", "Physical Sciences",
            "General Aptitude",
        ],
    },
    VerticalEntry {
        name: "Bihar",
        exams: &[
            "BPSC AEDO", "BSSC CGL-4", "Bihar Jeevika", "Bihar SI Daroga", "BSSC STENO",
            "BSSC Inter level", "BSSC Karyalay parichari", "Bihar Police driver",
        ],
        subjects: &[
            "All Subjects", "None", "Hindi", "Maths", "GK/GS", "Reasoning", "English", "Science",
            "Current Affairs", "Subject Knowledge", "Computer", "Static GK",
        ],
    },
    VerticalEntry {
        name: "Punjab",
        exams: &[
            "PSSSB", "Punjab police constable", "High court", "ETT/NTT", "PSTET", "Master Cadre",
            "Punjab PCS", "SSC", "Railways",
        ],
        subjects: &[
            "All Subjects", "None", "Static & Current Affairs", "General Knowledge",
            "Basic Computer Knowledge", "Logical Reasoning", "Quantitative Aptitude",
            "Numerical Aptitude", "General English", "Punjabi Language", "Punjab GK",
            "General Awareness", "Arithmetic", "Teaching Aptitude", "Pedagogy",
            "Information & Communication Technology (ICT)", "Hindi Language", "English Language",
            "Mathematics", "General Science", "Social Science", "Environmental Studies",
            "Science", "General Studies", "Civil Services Aptitude Test (CSAT)", "Reasoning",
        ],
    },
    VerticalEntry {
        name: "Odia",
        exams: &[
            "Bed Entrance Exam", "LTR MAINS ARTS", "OSSC CGL", "OSSC PEO", "SSD Sevak Sevika",
            "Police Constable", "RI AMIN MAINS", "RRB NTPC", "RRB Group D", "RRb PO",
            "IBPS Clerk", "OPSC",
        ],
        subjects: &[
            "All Subjects", "None", "Current Affairs", "Reasoning", "English", "GK/GS",
            "Geography", "History", "Polity", "Pedagogy", "Computer", "Physics", "Chemistry",
            "Mathematics", "Economics",
        ],
    },
    VerticalEntry {
        name: "Telugu",
        exams: &[
            "NTPC", "Group-D", "RRB Junior Engineer (CBT-1 Only)", "MTS", "CHSL", "GD", "CGL",
            "Bank PO", "Bank Clerk", "APPSC & TGPSC",
        ],
        subjects: &[
            "All Subjects", "None", "Mathematics", "Reasoning", "Polity", "Economy", "History",
            "Geography", "Current Affairs", "Computer", "Arithmetic", "English",
            "Banking/Financial Awareness", "Credit Co-Operative", "Science & Tech",
            "Telangana Movement (for Telangana Exams only)",
            "General Science (Physics + Chemistry + Biology)", "Teaching Aptitude", "Pedagogy",
            "ICT", "POCSO", "Administrative Aptitude",
        ],
    },
    VerticalEntry {
        name: "Tamil",
        exams: &[
            "TNPSC", "TET", "NTPC", "TNUSRB Si", "PC", "IB", "RPF", "RRB JE", "RRB GR D",
        ],
        subjects: &[
            "All Subjects", "None", "Current Affairs", "English", "Maths", "Geography",
            "Science", "Psychology", "GK", "Reasoning", "Biology", "Polity", "History", "GS",
        ],
    },
    VerticalEntry {
        name: "Bengal",
        exams: &[
            "WBSSC GROUP C & D", "SSC MTS", "RRB NTPC", "WBP", "Banking", "WBCS",
        ],
        subjects: &[
            "All Subjects", "None", "Current Affairs", "History", "Polity", "Mathematics", "Gk",
            "Gs", "English", "General Studies", "Static Gk", "Reasoning", "Banking Awareness",
            "Geography",
        ],
    },
    VerticalEntry {
        name: "Agriculture",
        exams: &[
            "IBPS SO AFO", "NABARD GRADE A", "FCI AG III Technical", "Haryana ADO/HDO",
            "Punjab ADO/HDO", "APSC ADO", "FSSAI CFSO/TO", "MP FSO", "CUET PG Agriculture",
            "UPCATET PG", "NSC Trainee", "IFFCO AGT", "KRIBHCO FRT",
            "Bihar Agriculture Coordinator", "BPSC BAO/SDAO", "BHO/SHDO", "Bihar Jeevika Bharti",
            "UPSSSC AGTA", "Cane Supervisor", "MP ESB", "RPSC Agriculture Supervisor",
            "DDA SO Horticulture", "DSSSB SO Horticulture", "NHB SHO", "CCI JCE", "CWC JTA",
            "BSSC Field Assistant",
        ],
        subjects: &[
            "All Subjects", "None", "Agronomy", "Genetics & Plant Breeding", "Entomology",
            "Soil Science", "Agri. Current Affairs", "Horticulture", "Allied Agriculture",
            "Animal Husbandry", "Plant Pathology", "Food Science & Technology",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_lists_all_verticals() {
        let taxonomy = Taxonomy::builtin();
        let verticals = taxonomy.verticals();
        assert_eq!(verticals.len(), 12);
        assert!(verticals.contains(&"SSC".to_string()));
        assert!(verticals.contains(&"Agriculture".to_string()));
    }

    #[test]
    fn known_vertical_has_exams_and_subjects() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.exams_for("SSC").contains(&"CGL".to_string()));
        assert!(taxonomy
            .subjects_for("SSC")
            .contains(&"Reasoning".to_string()));
    }

    #[test]
    fn unknown_vertical_yields_empty_lists() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.exams_for("Nonexistent").is_empty());
        assert!(taxonomy.subjects_for("Nonexistent").is_empty());
    }

    #[test]
    fn content_subcategories_are_exposed() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.content_subcategories().len(), 4);
    }
}
