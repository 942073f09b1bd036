//! Demo catalog and demo student, used by the companion CLI and the
//! integration tests. Seeding is idempotent: subjects already present by
//! name are skipped wholesale, the demo student is only inserted once.

use crate::auth::hash_password;
use crate::model::entity::{
    Lesson, LessonCreate, Question, QuestionCreate, Quiz, QuizCreate, Subject, SubjectCreate,
    Subtopic, SubtopicCreate, UserEntity, UserEntityCreate,
};
use crate::model::{DatabaseResult, ModelManager};

pub static DEMO_EMAIL: &str = "student@example.com";
pub static DEMO_PASSWORD: &str = "password123";
pub static DEMO_NAME: &str = "John Doe";

struct SeedQuestion {
    text: &'static str,
    options: &'static [&'static str],
    answer: i32,
}

struct SeedQuiz {
    title: &'static str,
    questions: &'static [SeedQuestion],
}

struct SeedLesson {
    title: &'static str,
    content: &'static str,
    quizzes: &'static [SeedQuiz],
}

struct SeedSubtopic {
    name: &'static str,
    lessons: &'static [SeedLesson],
}

struct SeedSubject {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
    subtopics: &'static [SeedSubtopic],
}

pub async fn seed_demo(mm: &ModelManager) -> DatabaseResult<()> {
    seed_demo_user(mm).await?;
    seed_catalog(mm).await?;
    Ok(())
}

pub async fn seed_demo_user(mm: &ModelManager) -> DatabaseResult<()> {
    if UserEntity::find_by_email(mm, DEMO_EMAIL).await?.is_some() {
        return Ok(());
    }

    let hash = hash_password(DEMO_PASSWORD)?;
    UserEntity::create(
        mm,
        UserEntityCreate {
            email: DEMO_EMAIL.to_string(),
            password_hash: hash,
            name: DEMO_NAME.to_string(),
        },
    )
    .await?;

    tracing::info!("seeded demo user {DEMO_EMAIL}");
    Ok(())
}

pub async fn seed_catalog(mm: &ModelManager) -> DatabaseResult<()> {
    for (subject_pos, s) in CATALOG.iter().enumerate() {
        if Subject::find_by_name(mm, s.name).await?.is_some() {
            tracing::debug!("subject {:?} already seeded, skipping", s.name);
            continue;
        }

        let subject = Subject::create(
            mm,
            SubjectCreate {
                name: s.name.to_string(),
                description: s.description.to_string(),
                icon: s.icon.to_string(),
                color: s.color.to_string(),
                position: subject_pos as i32,
            },
        )
        .await?;

        for (subtopic_pos, st) in s.subtopics.iter().enumerate() {
            let subtopic = Subtopic::create(
                mm,
                SubtopicCreate {
                    name: st.name.to_string(),
                    subject_id: subject.id(),
                    position: subtopic_pos as i32,
                },
            )
            .await?;

            for (lesson_pos, l) in st.lessons.iter().enumerate() {
                let lesson = Lesson::create(
                    mm,
                    LessonCreate {
                        title: l.title.to_string(),
                        content: l.content.to_string(),
                        subtopic_id: subtopic.id(),
                        position: lesson_pos as i32,
                    },
                )
                .await?;

                for q in l.quizzes {
                    let quiz = Quiz::create(
                        mm,
                        QuizCreate {
                            title: q.title.to_string(),
                            lesson_id: lesson.id(),
                        },
                    )
                    .await?;

                    for question in q.questions {
                        Question::create(
                            mm,
                            QuestionCreate {
                                text: question.text.to_string(),
                                options: question
                                    .options
                                    .iter()
                                    .map(|o| o.to_string())
                                    .collect(),
                                answer: question.answer,
                                quiz_id: quiz.id(),
                            },
                        )
                        .await?;
                    }
                }
            }
        }

        tracing::info!("seeded subject {:?}", s.name);
    }

    Ok(())
}

static CATALOG: &[SeedSubject] = &[
    SeedSubject {
        name: "Mathematics",
        description: "The study of numbers, shapes, and patterns.",
        icon: "calculator",
        color: "blue",
        subtopics: &[
            SeedSubtopic {
                name: "Numbers & Operations",
                lessons: &[SeedLesson {
                    title: "Introduction to Integers",
                    content: "Integers are whole numbers that can be positive, negative, or zero. They do not include fractions or decimals.",
                    quizzes: &[SeedQuiz {
                        title: "Integers Quiz",
                        questions: &[SeedQuestion {
                            text: "Which of the following is an integer?",
                            options: &["1.5", "-5", "2/3", "0.75"],
                            answer: 1,
                        }],
                    }],
                }],
            },
            SeedSubtopic { name: "Algebra", lessons: &[] },
            SeedSubtopic { name: "Geometry", lessons: &[] },
            SeedSubtopic { name: "Trigonometry", lessons: &[] },
            SeedSubtopic { name: "Calculus", lessons: &[] },
            SeedSubtopic { name: "Statistics & Probability", lessons: &[] },
        ],
    },
    SeedSubject {
        name: "Science",
        description: "The systematic study of the structure and behavior of the physical and natural world.",
        icon: "beaker",
        color: "green",
        subtopics: &[
            SeedSubtopic {
                name: "Physics",
                lessons: &[SeedLesson {
                    title: "Newtons Laws of Motion",
                    content: "1. An object at rest stays at rest. 2. F = ma. 3. Every action has an equal and opposite reaction.",
                    quizzes: &[SeedQuiz {
                        title: "Physics Quiz",
                        questions: &[SeedQuestion {
                            text: "What is the formula for force?",
                            options: &["F = m/a", "F = ma", "F = a/m", "F = m+a"],
                            answer: 1,
                        }],
                    }],
                }],
            },
            SeedSubtopic { name: "Chemistry", lessons: &[] },
            SeedSubtopic { name: "Biology", lessons: &[] },
            SeedSubtopic { name: "Earth Science", lessons: &[] },
            SeedSubtopic { name: "Environmental Science", lessons: &[] },
        ],
    },
    SeedSubject {
        name: "English",
        description: "Language, literature, and communication skills.",
        icon: "book",
        color: "purple",
        subtopics: &[
            SeedSubtopic {
                name: "Grammar",
                lessons: &[SeedLesson {
                    title: "Parts of Speech",
                    content: "Nouns, Verbs, Adjectives, Adverbs, Pronouns, Prepositions, Conjunctions, and Interjections are the 8 parts of speech.",
                    quizzes: &[SeedQuiz {
                        title: "Grammar Quiz",
                        questions: &[SeedQuestion {
                            text: "Which of these is a verb?",
                            options: &["Apple", "Running", "Beautiful", "Quickly"],
                            answer: 1,
                        }],
                    }],
                }],
            },
            SeedSubtopic { name: "Vocabulary", lessons: &[] },
            SeedSubtopic { name: "Reading Comprehension", lessons: &[] },
            SeedSubtopic { name: "Writing Skills", lessons: &[] },
            SeedSubtopic { name: "Literature", lessons: &[] },
        ],
    },
    SeedSubject {
        name: "History",
        description: "The study of past events, particularly in human affairs.",
        icon: "landmark",
        color: "amber",
        subtopics: &[
            SeedSubtopic {
                name: "Ancient History",
                lessons: &[SeedLesson {
                    title: "The Indus Valley Civilization",
                    content: "The Indus Valley Civilization was a Bronze Age civilization in the northwestern regions of South Asia.",
                    quizzes: &[SeedQuiz {
                        title: "History Quiz",
                        questions: &[SeedQuestion {
                            text: "Which river was central to the Indus Valley Civilization?",
                            options: &["Nile", "Indus", "Ganges", "Amazon"],
                            answer: 1,
                        }],
                    }],
                }],
            },
            SeedSubtopic { name: "Medieval History", lessons: &[] },
            SeedSubtopic { name: "Modern History", lessons: &[] },
            SeedSubtopic { name: "World History", lessons: &[] },
            SeedSubtopic { name: "Civics", lessons: &[] },
        ],
    },
    SeedSubject {
        name: "Geography",
        description: "The study of the physical features of the earth and its atmosphere.",
        icon: "globe",
        color: "emerald",
        subtopics: &[
            SeedSubtopic {
                name: "Physical Geography",
                lessons: &[SeedLesson {
                    title: "Internal Structure of the Earth",
                    content: "The Earth consists of three main layers: the crust, the mantle, and the core.",
                    quizzes: &[SeedQuiz {
                        title: "Geography Quiz",
                        questions: &[SeedQuestion {
                            text: "What is the outermost layer of the Earth?",
                            options: &["Core", "Mantle", "Crust", "Magma"],
                            answer: 2,
                        }],
                    }],
                }],
            },
            SeedSubtopic { name: "Human Geography", lessons: &[] },
            SeedSubtopic { name: "Maps & Skills", lessons: &[] },
            SeedSubtopic { name: "Climate & Weather", lessons: &[] },
        ],
    },
    SeedSubject {
        name: "ICT / Computer Science",
        description: "Technology, computing, and digital literacy.",
        icon: "cpu",
        color: "indigo",
        subtopics: &[
            SeedSubtopic {
                name: "Computer Basics",
                lessons: &[SeedLesson {
                    title: "Introduction to Hardware",
                    content: "Hardware refers to the physical components of a computer system, such as the CPU, RAM, and storage.",
                    quizzes: &[SeedQuiz {
                        title: "ICT Quiz",
                        questions: &[SeedQuestion {
                            text: "What does CPU stand for?",
                            options: &[
                                "Central Processing Unit",
                                "Computer Personal Unit",
                                "Central Process Utility",
                                "Common Power Unit",
                            ],
                            answer: 0,
                        }],
                    }],
                }],
            },
            SeedSubtopic { name: "Internet & Safety", lessons: &[] },
            SeedSubtopic { name: "Programming Basics", lessons: &[] },
            SeedSubtopic { name: "Data & Databases", lessons: &[] },
            SeedSubtopic { name: "AI Fundamentals", lessons: &[] },
        ],
    },
    SeedSubject {
        name: "General Knowledge (GK)",
        description: "Broad knowledge across various fields.",
        icon: "lightbulb",
        color: "yellow",
        subtopics: &[
            SeedSubtopic {
                name: "World Facts",
                lessons: &[SeedLesson {
                    title: "Seven Wonders of the World",
                    content: "The Seven Wonders of the Ancient World is a list of remarkable constructions of classical antiquity.",
                    quizzes: &[SeedQuiz {
                        title: "GK Quiz",
                        questions: &[SeedQuestion {
                            text: "Which of these is one of the Seven Wonders?",
                            options: &[
                                "Eiffel Tower",
                                "Great Wall of China",
                                "Statue of Liberty",
                                "Burj Khalifa",
                            ],
                            answer: 1,
                        }],
                    }],
                }],
            },
            SeedSubtopic { name: "Current Affairs", lessons: &[] },
            SeedSubtopic { name: "Science & Tech GK", lessons: &[] },
            SeedSubtopic { name: "Sports GK", lessons: &[] },
            SeedSubtopic { name: "Logical Reasoning", lessons: &[] },
        ],
    },
    SeedSubject {
        name: "Languages",
        description: "Study of different world languages.",
        icon: "languages",
        color: "pink",
        subtopics: &[
            SeedSubtopic {
                name: "Grammar",
                lessons: &[SeedLesson {
                    title: "Noun Genders",
                    content: "In many languages, nouns have genders (masculine, feminine, neuter).",
                    quizzes: &[SeedQuiz {
                        title: "Languages Quiz",
                        questions: &[SeedQuestion {
                            text: "What is \"gender\" in the context of grammar?",
                            options: &[
                                "A type of verb",
                                "A category for nouns",
                                "A punctuation mark",
                                "A tense",
                            ],
                            answer: 1,
                        }],
                    }],
                }],
            },
            SeedSubtopic { name: "Speaking", lessons: &[] },
            SeedSubtopic { name: "Listening", lessons: &[] },
            SeedSubtopic { name: "Writing", lessons: &[] },
        ],
    },
    SeedSubject {
        name: "Life Skills",
        description: "Essential skills for personal growth and career.",
        icon: "user-check",
        color: "cyan",
        subtopics: &[
            SeedSubtopic {
                name: "Financial Literacy",
                lessons: &[SeedLesson {
                    title: "Introduction to Budgeting",
                    content: "Budgeting is the process of creating a plan to spend your money.",
                    quizzes: &[SeedQuiz {
                        title: "Life Skills Quiz",
                        questions: &[SeedQuestion {
                            text: "What is a budget?",
                            options: &[
                                "A spending plan",
                                "A bank account",
                                "A type of loan",
                                "A credit card",
                            ],
                            answer: 0,
                        }],
                    }],
                }],
            },
            SeedSubtopic { name: "Critical Thinking", lessons: &[] },
            SeedSubtopic { name: "Health & Wellness", lessons: &[] },
            SeedSubtopic { name: "Career Awareness", lessons: &[] },
        ],
    },
];
