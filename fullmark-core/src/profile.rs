use std::sync::Arc;

/// Static student record shown on the profile page. The platform has no
/// account system; this is the demo identity it displays.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentProfile {
    pub name: Arc<str>,
    pub code: Arc<str>,
    pub division: Arc<str>,
    pub year: Arc<str>,
    pub join_date: Arc<str>,
}

impl StudentProfile {
    pub fn demo() -> Self {
        Self {
            name: Arc::from("أحمد محمد الجيزاوي"),
            code: Arc::from("482916"),
            division: Arc::from("علمي علوم"),
            year: Arc::from("الصف الثالث الثانوي"),
            join_date: Arc::from("سبتمبر 2025"),
        }
    }
}
