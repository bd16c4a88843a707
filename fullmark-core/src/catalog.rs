use std::sync::Arc;

use serde::Deserialize;

/// Fixed display order of the known subjects. Subjects outside this list
/// sort after all of them, keeping their original relative order.
pub const SUBJECT_ORDER: &[&str] = &[
    "فيزياء",
    "English",
    "لغة عربية",
    "Le français",
    "أحياء",
    "كيمياء",
];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Year {
    pub year_name: Arc<str>,
    pub subjects: Vec<Arc<Subject>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Subject {
    pub subject_name: Arc<str>,
    pub teachers: Vec<Arc<Teacher>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Teacher {
    pub teacher_name: Arc<str>,
    pub chapters: Vec<Arc<Chapter>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Chapter {
    pub chapter_name: Arc<str>,
    pub lectures: Vec<Arc<Lecture>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Lecture {
    pub lecture_name: Arc<str>,
    pub videos: Vec<Arc<Video>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Video {
    pub video_name: Option<Arc<str>>,
    pub url: Arc<str>,
}

impl Video {
    /// Videos in the feed often come without a name; fall back to a
    /// numbered label, 1-based like the platform shows them.
    pub fn display_name(&self, index: usize) -> String {
        match &self.video_name {
            Some(name) => name.to_string(),
            None => format!("فيديو رقم {}", index + 1),
        }
    }
}

fn subject_priority(name: &str) -> usize {
    SUBJECT_ORDER
        .iter()
        .position(|&known| known == name)
        .unwrap_or(SUBJECT_ORDER.len())
}

/// Subjects of `year` in the platform's fixed order. The sort is stable,
/// so unknown subjects stay in feed order behind the known ones.
pub fn sorted_subjects(year: &Year) -> Vec<Arc<Subject>> {
    let mut subjects = year.subjects.clone();
    subjects.sort_by_key(|subject| subject_priority(&subject.subject_name));
    subjects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str) -> Arc<Subject> {
        Arc::new(Subject {
            subject_name: name.into(),
            teachers: Vec::new(),
        })
    }

    fn year_with(names: &[&str]) -> Year {
        Year {
            year_name: "2026".into(),
            subjects: names.iter().map(|name| subject(name)).collect(),
        }
    }

    #[test]
    fn known_subjects_sort_in_fixed_order() {
        let year = year_with(&["Unknown", "كيمياء", "فيزياء"]);
        let sorted = sorted_subjects(&year);
        let names: Vec<&str> = sorted.iter().map(|subject| &*subject.subject_name).collect();
        assert_eq!(names, ["فيزياء", "كيمياء", "Unknown"]);
    }

    #[test]
    fn unknown_subjects_keep_feed_order() {
        let year = year_with(&["Z", "English", "A"]);
        let sorted = sorted_subjects(&year);
        assert_eq!(&*sorted[0].subject_name, "English");
        assert_eq!(&*sorted[1].subject_name, "Z");
        assert_eq!(&*sorted[2].subject_name, "A");
    }

    #[test]
    fn sorting_is_idempotent() {
        let year = year_with(&["Z", "أحياء", "A", "فيزياء"]);
        let once = sorted_subjects(&year);
        let again = sorted_subjects(&Year {
            year_name: year.year_name.clone(),
            subjects: once.clone(),
        });
        assert_eq!(once, again);
    }

    #[test]
    fn decodes_content_document() {
        let body = r#"[
            {
                "year_name": "2026",
                "subjects": [
                    {
                        "subject_name": "فيزياء",
                        "teachers": [
                            {
                                "teacher_name": "Mr. Said",
                                "chapters": [
                                    {
                                        "chapter_name": "Mechanics",
                                        "lectures": [
                                            {
                                                "lecture_name": "Intro",
                                                "videos": [
                                                    { "url": "https://example.com/v1" },
                                                    { "video_name": "Part 2", "url": "https://example.com/v2" }
                                                ]
                                            }
                                        ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }
        ]"#;
        let years: Vec<Arc<Year>> = serde_json::from_str(body).unwrap();
        assert_eq!(years.len(), 1);
        let videos = &years[0].subjects[0].teachers[0].chapters[0].lectures[0].videos;
        assert_eq!(videos[0].display_name(0), "فيديو رقم 1");
        assert_eq!(videos[1].display_name(1), "Part 2");
    }
}
