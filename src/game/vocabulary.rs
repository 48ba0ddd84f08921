use serde::Serialize;

/// One Russian word and its English translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WordPair {
    /// Stable identifier; determines both words.
    pub id: u32,
    pub russian: &'static str,
    pub english: &'static str,
}

impl WordPair {
    pub const fn new(id: u32, russian: &'static str, english: &'static str) -> Self {
        Self {
            id,
            russian,
            english,
        }
    }
}

/// The word list every round is drawn from.
pub const VOCABULARY: [WordPair; 12] = [
    WordPair::new(1, "Кот", "Cat"),
    WordPair::new(2, "Собака", "Dog"),
    WordPair::new(3, "Дом", "House"),
    WordPair::new(4, "Мышь", "Mouse"),
    WordPair::new(5, "Человек", "Human"),
    WordPair::new(6, "Стол", "Table"),
    WordPair::new(7, "Книга", "Book"),
    WordPair::new(8, "Рыба", "Fish"),
    WordPair::new(9, "Море", "Sea"),
    WordPair::new(10, "Чай", "Tea"),
    WordPair::new(11, "Кофеин", "Caffeine"),
    WordPair::new(12, "Понедельник", "Monday"),
];
