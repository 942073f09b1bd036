mod user;
pub use user::{UserEntity, UserEntityCreate};

mod subject;
pub use subject::{Subject, SubjectCreate, SubjectDetailRow, SubjectWithCountRow};

mod subtopic;
pub use subtopic::{Subtopic, SubtopicCreate};

mod lesson;
pub use lesson::{Lesson, LessonCreate, LessonDetailRow};

mod quiz;
pub use quiz::{Quiz, QuizCreate};

mod question;
pub use question::{Question, QuestionCreate};

mod progress;
pub use progress::{Progress, ProgressUpsert, ProgressWithContextRow};
