//! Built-in mock catalog: AP subjects, their units, a handful of sample
//! questions and the starter planner tasks.

use ap_core::model::{
    Difficulty, PlannerTask, PlannerTaskDraft, Question, QuestionDraft, QuestionId, Streak,
    Subject, SubjectDraft, SubjectId, TaskId, UnitDraft, UnitId,
};
use chrono::NaiveDate;
use tracing::debug;

use crate::repository::{InMemoryRepository, Storage};

/// Streak length the mock profile starts with.
pub const SEED_STREAK_DAYS: u32 = 7;

struct SubjectRow {
    id: &'static str,
    title: &'static str,
    short_title: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
    progress: u8,
    /// (id, title, description, question count, progress)
    units: &'static [(&'static str, &'static str, &'static str, u32, u8)],
}

struct QuestionRow {
    id: &'static str,
    unit_id: &'static str,
    text: &'static str,
    choices: [&'static str; 4],
    correct_answer: usize,
    difficulty: Difficulty,
    topic: &'static str,
    explanation: &'static str,
}

//
// ─── DATA ──────────────────────────────────────────────────────────────────────
//

const SUBJECTS: &[SubjectRow] = &[
    SubjectRow {
        id: "ap-chemistry",
        title: "AP Chemistry",
        short_title: "AP Chem",
        description: "Master chemical reactions, atomic structure, and thermodynamics",
        icon: "⚗️",
        color: "#4CAF50",
        progress: 45,
        units: &[
            ("chem-1", "Unit 1: Atomic Structure and Properties", "Explore atomic models, electron configuration, and periodic trends", 35, 80),
            ("chem-2", "Unit 2: Molecular and Ionic Compound Structure", "Learn about bonding, Lewis structures, and molecular geometry", 40, 65),
            ("chem-3", "Unit 3: Intermolecular Forces", "Understand IMFs and their effects on physical properties", 25, 40),
            ("chem-4", "Unit 4: Chemical Reactions", "Master reaction types, stoichiometry, and balancing equations", 45, 30),
            ("chem-5", "Unit 5: Kinetics", "Study reaction rates, rate laws, and mechanisms", 30, 20),
            ("chem-6", "Unit 6: Thermodynamics", "Explore enthalpy, entropy, and Gibbs free energy", 35, 10),
            ("chem-7", "Unit 7: Equilibrium", "Learn equilibrium constants and Le Chatelier's principle", 40, 0),
            ("chem-8", "Unit 8: Acids and Bases", "Master pH, buffers, and acid-base reactions", 45, 0),
            ("chem-9", "Unit 9: Applications of Thermodynamics", "Apply thermodynamic principles to real-world scenarios", 25, 0),
        ],
    },
    SubjectRow {
        id: "ap-biology",
        title: "AP Biology",
        short_title: "AP Bio",
        description: "Explore cellular processes, genetics, and evolution",
        icon: "🧬",
        color: "#8BC34A",
        progress: 62,
        units: &[
            ("bio-1", "Unit 1: Chemistry of Life", "Learn about biological molecules and water properties", 30, 100),
            ("bio-2", "Unit 2: Cell Structure and Function", "Explore cell organelles and membrane transport", 40, 85),
            ("bio-3", "Unit 3: Cellular Energetics", "Master photosynthesis and cellular respiration", 45, 70),
            ("bio-4", "Unit 4: Cell Communication and Cell Cycle", "Study signal transduction and mitosis", 35, 55),
            ("bio-5", "Unit 5: Heredity", "Learn Mendelian genetics and inheritance patterns", 40, 40),
            ("bio-6", "Unit 6: Gene Expression and Regulation", "Explore DNA replication and protein synthesis", 45, 25),
            ("bio-7", "Unit 7: Natural Selection", "Understand evolution and evidence for evolution", 30, 15),
            ("bio-8", "Unit 8: Ecology", "Study ecosystems, populations, and biodiversity", 35, 0),
        ],
    },
    SubjectRow {
        id: "ap-calculus-ab",
        title: "AP Calculus AB",
        short_title: "AP Calc AB",
        description: "Master limits, derivatives, and integrals",
        icon: "📐",
        color: "#2196F3",
        progress: 38,
        units: &[
            ("calc-1", "Unit 1: Limits and Continuity", "Learn limit evaluation and continuity concepts", 35, 90),
            ("calc-2", "Unit 2: Differentiation: Definition and Fundamental Properties", "Master derivative rules and applications", 40, 75),
            ("calc-3", "Unit 3: Differentiation: Composite, Implicit, and Inverse Functions", "Apply chain rule and implicit differentiation", 35, 50),
            ("calc-4", "Unit 4: Contextual Applications of Differentiation", "Solve related rates and optimization problems", 30, 30),
            ("calc-5", "Unit 5: Analytical Applications of Differentiation", "Analyze function behavior using derivatives", 40, 15),
            ("calc-6", "Unit 6: Integration and Accumulation of Change", "Learn definite and indefinite integrals", 45, 5),
            ("calc-7", "Unit 7: Differential Equations", "Solve separable differential equations", 25, 0),
            ("calc-8", "Unit 8: Applications of Integration", "Calculate areas and volumes using integration", 35, 0),
        ],
    },
    SubjectRow {
        id: "ap-physics-1",
        title: "AP Physics 1",
        short_title: "AP Phys 1",
        description: "Understand mechanics, waves, and circuits",
        icon: "⚛️",
        color: "#9C27B0",
        progress: 28,
        units: &[
            ("phys-1", "Unit 1: Kinematics", "Study motion in one and two dimensions", 40, 70),
            ("phys-2", "Unit 2: Dynamics", "Learn Newton's laws and force analysis", 45, 50),
            ("phys-3", "Unit 3: Circular Motion and Gravitation", "Explore centripetal force and gravitational fields", 30, 30),
            ("phys-4", "Unit 4: Energy", "Master work, energy, and power concepts", 35, 20),
            ("phys-5", "Unit 5: Momentum", "Study impulse and conservation of momentum", 30, 10),
            ("phys-6", "Unit 6: Simple Harmonic Motion", "Understand oscillations and wave behavior", 25, 0),
            ("phys-7", "Unit 7: Torque and Rotational Motion", "Analyze rotational dynamics", 35, 0),
        ],
    },
    SubjectRow {
        id: "ap-us-history",
        title: "AP US History",
        short_title: "APUSH",
        description: "Explore American history from colonization to present",
        icon: "🗽",
        color: "#F44336",
        progress: 52,
        units: &[
            ("apush-1", "Unit 1: Period 1 (1491-1607)", "Pre-Columbian societies and European exploration", 25, 100),
            ("apush-2", "Unit 2: Period 2 (1607-1754)", "Colonial America and transatlantic connections", 35, 85),
            ("apush-3", "Unit 3: Period 3 (1754-1800)", "Revolution and the new nation", 40, 70),
            ("apush-4", "Unit 4: Period 4 (1800-1848)", "Democracy, expansion, and reform", 45, 55),
            ("apush-5", "Unit 5: Period 5 (1844-1877)", "Civil War and Reconstruction", 50, 40),
            ("apush-6", "Unit 6: Period 6 (1865-1898)", "Industrialization and the Gilded Age", 40, 25),
            ("apush-7", "Unit 7: Period 7 (1890-1945)", "Progressive Era, WWI, and WWII", 55, 10),
            ("apush-8", "Unit 8: Period 8 (1945-1980)", "Cold War and civil rights", 45, 0),
            ("apush-9", "Unit 9: Period 9 (1980-Present)", "Modern America and globalization", 30, 0),
        ],
    },
    SubjectRow {
        id: "ap-world-history",
        title: "AP World History",
        short_title: "AP World",
        description: "Study global civilizations and their connections",
        icon: "🌍",
        color: "#FF9800",
        progress: 35,
        units: &[
            ("world-1", "Unit 1: The Global Tapestry (1200-1450)", "Regional civilizations and their development", 35, 75),
            ("world-2", "Unit 2: Networks of Exchange (1200-1450)", "Trade routes and cultural diffusion", 40, 60),
            ("world-3", "Unit 3: Land-Based Empires (1450-1750)", "Ottoman, Safavid, Mughal, and more", 45, 45),
            ("world-4", "Unit 4: Transoceanic Connections (1450-1750)", "Exploration and the Columbian Exchange", 40, 30),
            ("world-5", "Unit 5: Revolutions (1750-1900)", "Political and industrial revolutions", 50, 20),
            ("world-6", "Unit 6: Consequences of Industrialization (1750-1900)", "Imperialism and social changes", 45, 10),
            ("world-7", "Unit 7: Global Conflict (1900-Present)", "World Wars and decolonization", 55, 0),
            ("world-8", "Unit 8: Cold War and Decolonization (1900-Present)", "Superpower rivalry and new nations", 40, 0),
            ("world-9", "Unit 9: Globalization (1900-Present)", "Modern global connections", 30, 0),
        ],
    },
    SubjectRow {
        id: "ap-english-lang",
        title: "AP English Language",
        short_title: "AP Lang",
        description: "Master rhetoric, argumentation, and synthesis",
        icon: "✍️",
        color: "#607D8B",
        progress: 55,
        units: &[
            ("lang-1", "Unit 1: Claims and Evidence", "Analyze and construct arguments", 30, 90),
            ("lang-2", "Unit 2: Reasoning and Organization", "Understand logical structure", 35, 75),
            ("lang-3", "Unit 3: Style", "Analyze author's stylistic choices", 40, 60),
            ("lang-4", "Unit 4: Synthesis", "Combine multiple sources into arguments", 35, 45),
            ("lang-5", "Unit 5: Rhetorical Analysis", "Analyze rhetorical strategies", 45, 30),
            ("lang-6", "Unit 6: Argumentation", "Develop and support arguments", 40, 15),
        ],
    },
    SubjectRow {
        id: "ap-macroeconomics",
        title: "AP Macroeconomics",
        short_title: "AP Macro",
        description: "Understand national and global economic principles",
        icon: "📊",
        color: "#00BCD4",
        progress: 42,
        units: &[
            ("macro-1", "Unit 1: Basic Economic Concepts", "Scarcity, opportunity cost, and production", 25, 85),
            ("macro-2", "Unit 2: Economic Indicators and the Business Cycle", "GDP, inflation, and unemployment", 35, 70),
            ("macro-3", "Unit 3: National Income and Price Determination", "Aggregate supply and demand", 40, 50),
            ("macro-4", "Unit 4: Financial Sector", "Money, banking, and monetary policy", 45, 30),
            ("macro-5", "Unit 5: Long-Run Consequences of Stabilization Policies", "Fiscal and monetary policy effects", 35, 15),
            ("macro-6", "Unit 6: Open Economy—International Trade and Finance", "Balance of payments and exchange rates", 30, 0),
        ],
    },
];

const QUESTIONS: &[QuestionRow] = &[
    QuestionRow {
        id: "q1",
        unit_id: "chem-1",
        text: "Which of the following electron configurations represents an atom in an excited state?",
        choices: ["1s² 2s² 2p⁶ 3s²", "1s² 2s² 2p⁶ 3s¹", "1s² 2s² 2p⁵ 3s¹", "1s² 2s² 2p⁶"],
        correct_answer: 2,
        difficulty: Difficulty::Medium,
        topic: "Electron Configuration",
        explanation: "An excited state occurs when an electron occupies a higher energy level than its ground state. In option C, an electron from 2p has been excited to 3s, leaving the 2p subshell with only 5 electrons instead of 6.",
    },
    QuestionRow {
        id: "q2",
        unit_id: "chem-1",
        text: "As atomic radius increases down a group, what happens to first ionization energy?",
        choices: ["Increases", "Decreases", "Remains constant", "First increases then decreases"],
        correct_answer: 1,
        difficulty: Difficulty::Easy,
        topic: "Periodic Trends",
        explanation: "As atomic radius increases down a group, the outer electrons are farther from the nucleus and experience more shielding. This makes them easier to remove, so ionization energy decreases.",
    },
    QuestionRow {
        id: "q3",
        unit_id: "chem-1",
        text: "Which of the following atoms has the highest electronegativity?",
        choices: ["Sodium (Na)", "Chlorine (Cl)", "Fluorine (F)", "Oxygen (O)"],
        correct_answer: 2,
        difficulty: Difficulty::Easy,
        topic: "Periodic Trends",
        explanation: "Fluorine has the highest electronegativity of all elements (3.98 on the Pauling scale). Electronegativity increases across a period and decreases down a group.",
    },
    QuestionRow {
        id: "q4",
        unit_id: "chem-2",
        text: "According to VSEPR theory, what is the molecular geometry of SF₄?",
        choices: ["Tetrahedral", "Seesaw", "Trigonal bipyramidal", "Square planar"],
        correct_answer: 1,
        difficulty: Difficulty::Hard,
        topic: "Molecular Geometry",
        explanation: "SF₄ has 4 bonding pairs and 1 lone pair, giving it 5 electron domains. The electron geometry is trigonal bipyramidal, but the molecular geometry (shape) is seesaw because the lone pair occupies an equatorial position.",
    },
    QuestionRow {
        id: "q5",
        unit_id: "bio-1",
        text: "Which of the following is NOT a property of water that makes it essential for life?",
        choices: [
            "High specific heat capacity",
            "Universal solvent properties",
            "Lower density as a solid than liquid",
            "Nonpolar covalent bonds",
        ],
        correct_answer: 3,
        difficulty: Difficulty::Easy,
        topic: "Properties of Water",
        explanation: "Water has polar covalent bonds, not nonpolar. The electronegativity difference between oxygen and hydrogen creates partial charges, making water a polar molecule. This polarity is responsible for many of water's life-supporting properties.",
    },
    QuestionRow {
        id: "q6",
        unit_id: "calc-1",
        text: "What is the limit of (sin x)/x as x approaches 0?",
        choices: ["0", "1", "undefined", "∞"],
        correct_answer: 1,
        difficulty: Difficulty::Medium,
        topic: "Limits",
        explanation: "This is a famous limit known as the \"sinc function\" limit. Using L'Hôpital's rule or the squeeze theorem, we can show that lim(x→0) sin(x)/x = 1. This limit is fundamental to calculus.",
    },
];

/// (id, title, subject, unit, completed, minutes)
const TASKS: &[(&str, &str, &str, &str, bool, u32)] = &[
    ("t1", "Review Unit 1 Flashcards", "ap-chemistry", "chem-1", false, 30),
    ("t2", "Practice Limit Problems", "ap-calculus-ab", "calc-1", true, 45),
    ("t3", "Read Chapter on DNA Replication", "ap-biology", "bio-6", false, 60),
];

//
// ─── BUILDERS ──────────────────────────────────────────────────────────────────
//

/// Validate the built-in subjects and units.
///
/// # Errors
///
/// Returns `ap_core::Error` if a record fails validation.
pub fn subjects() -> Result<Vec<Subject>, ap_core::Error> {
    SUBJECTS
        .iter()
        .map(|row| -> Result<Subject, ap_core::Error> {
            let subject_id = SubjectId::new(row.id);
            let units = row
                .units
                .iter()
                .map(|&(id, title, description, question_count, progress)| UnitDraft {
                    id: UnitId::new(id),
                    subject_id: subject_id.clone(),
                    title: title.to_owned(),
                    description: description.to_owned(),
                    question_count,
                    progress,
                })
                .collect();
            let draft = SubjectDraft {
                id: subject_id,
                title: row.title.to_owned(),
                short_title: row.short_title.to_owned(),
                description: row.description.to_owned(),
                icon: row.icon.to_owned(),
                color: row.color.to_owned(),
                progress: row.progress,
                units,
            };
            Ok(draft.validate()?)
        })
        .collect()
}

/// Validate the built-in sample questions.
///
/// # Errors
///
/// Returns `ap_core::Error` if a question fails validation.
pub fn questions() -> Result<Vec<Question>, ap_core::Error> {
    QUESTIONS
        .iter()
        .map(|row| -> Result<Question, ap_core::Error> {
            let draft = QuestionDraft {
                id: QuestionId::new(row.id),
                unit_id: UnitId::new(row.unit_id),
                text: row.text.to_owned(),
                choices: row.choices.iter().map(|c| (*c).to_owned()).collect(),
                correct_answer: row.correct_answer,
                difficulty: row.difficulty,
                topic: row.topic.to_owned(),
                explanation: row.explanation.to_owned(),
            };
            Ok(draft.validate()?)
        })
        .collect()
}

/// Starter planner tasks, all scheduled on `today`.
///
/// # Errors
///
/// Returns `ap_core::Error` if a task fails validation.
pub fn planner_tasks(today: NaiveDate) -> Result<Vec<PlannerTask>, ap_core::Error> {
    TASKS
        .iter()
        .map(|&(id, title, subject, unit, completed, minutes)| -> Result<PlannerTask, ap_core::Error> {
            let draft = PlannerTaskDraft {
                title: title.to_owned(),
                subject_id: SubjectId::new(subject),
                unit_id: Some(UnitId::new(unit)),
                date: today,
                duration_minutes: minutes,
            };
            Ok(draft.validate(TaskId::new(id))?.with_completed(completed))
        })
        .collect()
}

/// The mock profile's streak: a week long, last studied `today`.
#[must_use]
pub fn streak(today: NaiveDate) -> Streak {
    Streak::from_parts(SEED_STREAK_DAYS, Some(today))
}

impl InMemoryRepository {
    /// Repository preloaded with the built-in catalog and planner tasks.
    ///
    /// # Errors
    ///
    /// Returns `ap_core::Error` if the seed data fails validation.
    pub fn seeded(today: NaiveDate) -> Result<Self, ap_core::Error> {
        let subjects = subjects()?;
        let questions = questions()?;
        let tasks = planner_tasks(today)?;
        debug!(
            subjects = subjects.len(),
            questions = questions.len(),
            tasks = tasks.len(),
            "seeded in-memory catalog"
        );
        Ok(Self::with_records(subjects, questions, tasks))
    }
}

impl Storage {
    /// In-memory storage preloaded with the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `ap_core::Error` if the seed data fails validation.
    pub fn seeded(today: NaiveDate) -> Result<Self, ap_core::Error> {
        Ok(Self::from_repository(InMemoryRepository::seeded(today)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::CatalogRepository;
    use ap_core::time::fixed_clock;

    #[test]
    fn seed_data_validates() {
        let subjects = subjects().unwrap();
        assert_eq!(subjects.len(), 8);
        assert_eq!(subjects.iter().map(|s| s.units().len()).sum::<usize>(), 62);
        assert_eq!(questions().unwrap().len(), 6);
    }

    #[test]
    fn every_question_targets_a_seeded_unit() {
        let subjects = subjects().unwrap();
        for question in questions().unwrap() {
            assert!(
                subjects.iter().any(|s| s.unit(question.unit_id()).is_some()),
                "{} has no unit",
                question.id()
            );
        }
    }

    #[test]
    fn planner_tasks_are_dated_today() {
        let today = fixed_clock().today();
        let tasks = planner_tasks(today).unwrap();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| t.date() == today));
        assert_eq!(tasks.iter().filter(|t| t.is_completed()).count(), 1);
    }

    #[tokio::test]
    async fn seeded_storage_serves_chem_1_questions() {
        let storage = Storage::seeded(fixed_clock().today()).unwrap();
        let questions = storage
            .catalog
            .list_questions(&UnitId::new("chem-1"))
            .await
            .unwrap();
        assert_eq!(questions.len(), 3);
        let subject = storage
            .catalog
            .get_subject(&SubjectId::new("ap-chemistry"))
            .await
            .unwrap();
        assert_eq!(subject.short_title(), "AP Chem");
    }
}
