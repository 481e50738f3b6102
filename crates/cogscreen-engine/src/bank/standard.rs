use cogscreen_core::models::domain::Applicability::{Both, ParentOnly, TeacherOnly};
use cogscreen_core::models::domain::DomainTag::{
    Attention, Language, Math, MotorSpatial, Reading, Writing,
};
use cogscreen_core::models::domain::{Applicability, DomainTag};

use super::Question;

/// Reference questionnaire: 40 items across the six domains.
///
/// Items are clustered by domain. Weights above 1.0 mark items with stronger
/// screening value for their domain.
#[rustfmt::skip]
pub(super) fn questions() -> Vec<Question> {
    vec![
        // Attention
        q("att_01", "Has difficulty sustaining attention on tasks or play activities", Attention, 1.5, Both),
        q("att_02", "Is easily distracted by background noise or movement", Attention, 1.0, Both),
        q("att_03", "Loses track of multi-step instructions before finishing", Attention, 1.25, Both),
        q("att_04", "Leaves homework or chores unfinished", Attention, 1.0, ParentOnly),
        q("att_05", "Fidgets or leaves their seat when expected to stay seated", Attention, 1.0, Both),
        q("att_06", "Loses items needed for school or activities", Attention, 0.75, Both),
        q("att_07", "Needs frequent redirection to stay on task during lessons", Attention, 1.25, TeacherOnly),
        q("att_08", "Interrupts or blurts out answers before a question is finished", Attention, 1.0, Both),
        // Reading
        q("rd_01", "Reads slowly or with great effort compared to peers", Reading, 1.5, Both),
        q("rd_02", "Guesses at words instead of sounding them out", Reading, 1.25, Both),
        q("rd_03", "Confuses similar-looking letters such as b/d or p/q", Reading, 1.0, Both),
        q("rd_04", "Loses their place or skips lines while reading", Reading, 1.0, Both),
        q("rd_05", "Struggles to remember what they have just read", Reading, 1.25, Both),
        q("rd_06", "Avoids reading aloud or reading for pleasure", Reading, 0.75, ParentOnly),
        q("rd_07", "Reads below the expected level for their class", Reading, 1.5, TeacherOnly),
        // Writing
        q("wr_01", "Handwriting is hard to read", Writing, 1.0, Both),
        q("wr_02", "Misspells common words, even after practice", Writing, 1.5, Both),
        q("wr_03", "Reverses letters or numbers when writing", Writing, 1.0, Both),
        q("wr_04", "Has difficulty organizing ideas into sentences", Writing, 1.25, Both),
        q("wr_05", "Omits punctuation or capital letters", Writing, 0.75, Both),
        q("wr_06", "Takes much longer than peers to copy from the board", Writing, 1.0, TeacherOnly),
        q("wr_07", "Avoids or becomes upset by writing tasks", Writing, 0.75, Both),
        // Math
        q("ma_01", "Has difficulty recalling basic number facts", Math, 1.5, Both),
        q("ma_02", "Counts on fingers long after peers have stopped", Math, 1.0, Both),
        q("ma_03", "Confuses mathematical symbols such as + and ×", Math, 1.0, Both),
        q("ma_04", "Struggles with word problems even when the arithmetic is simple", Math, 1.25, Both),
        q("ma_05", "Has trouble telling time or handling money", Math, 1.0, Both),
        q("ma_06", "Loses track of place value when lining up numbers", Math, 1.0, Both),
        // Language
        q("lg_01", "Has trouble finding the right word when speaking", Language, 1.25, Both),
        q("lg_02", "Has difficulty following spoken directions", Language, 1.25, Both),
        q("lg_03", "Mispronounces long or unfamiliar words", Language, 1.0, Both),
        q("lg_04", "Has difficulty retelling a story in the right order", Language, 1.0, Both),
        q("lg_05", "Struggles to learn rhymes, songs, or sequences such as days of the week", Language, 1.0, Both),
        q("lg_06", "Misunderstands jokes, idioms, or figurative language", Language, 0.75, Both),
        // Motor & spatial
        q("ms_01", "Has an awkward or tiring pencil grip", MotorSpatial, 1.0, Both),
        q("ms_02", "Has difficulty with buttons, zips, or shoelaces", MotorSpatial, 1.0, ParentOnly),
        q("ms_03", "Confuses left and right", MotorSpatial, 1.0, Both),
        q("ms_04", "Bumps into things or seems clumsy", MotorSpatial, 0.75, Both),
        q("ms_05", "Has trouble copying shapes or diagrams", MotorSpatial, 1.25, Both),
        q("ms_06", "Struggles to judge spacing on the page", MotorSpatial, 1.0, Both),
    ]
}

fn q(
    id: &str,
    text: &str,
    category: DomainTag,
    weight: f64,
    applicability: Applicability,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        category,
        weight,
        applicability,
    }
}
