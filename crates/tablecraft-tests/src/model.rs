///
/// Player
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub score: i32,
    pub guild: Option<String>,
    pub rating: Option<f64>,
}

///
/// Guild
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Guild {
    pub id: i64,
    pub title: String,
    pub active: bool,
}
