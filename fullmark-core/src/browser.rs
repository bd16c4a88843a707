use std::sync::Arc;

use crate::{
    catalog::{self, Chapter, Lecture, Subject, Teacher, Video, Year},
    source::FetchCatalog,
};

/// Depth level of the drill-down. What actually renders at a step depends
/// on the matching `Selection` slots being filled.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Step {
    Subjects,
    Teachers,
    Chapters,
    Lectures,
    Videos,
}

impl Step {
    pub fn title(&self) -> &'static str {
        match self {
            Step::Subjects => "المواد الدراسية",
            Step::Teachers => "اختر المدرس",
            Step::Chapters => "الفصول",
            Step::Lectures => "المحاضرات",
            Step::Videos => "الفيديوهات",
        }
    }

    /// One level up, or `None` at the top.
    pub fn back(self) -> Option<Step> {
        match self {
            Step::Subjects => None,
            Step::Teachers => Some(Step::Subjects),
            Step::Chapters => Some(Step::Teachers),
            Step::Lectures => Some(Step::Chapters),
            Step::Videos => Some(Step::Lectures),
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::Subjects
    }
}

/// Chosen node at each depth. A slot below an empty slot is itself empty;
/// the select operations keep that true by clearing everything deeper.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    pub year: Option<Arc<Year>>,
    pub subject: Option<Arc<Subject>>,
    pub teacher: Option<Arc<Teacher>>,
    pub chapter: Option<Arc<Chapter>>,
    pub lecture: Option<Arc<Lecture>>,
}

/// One entry of the crumb trail, labeled with the selected node's name and
/// pointing at the step a jump to it should land on.
#[derive(Clone, Debug, PartialEq)]
pub struct Breadcrumb {
    pub target: Step,
    pub label: Arc<str>,
}

const HOME_LABEL: &str = "الرئيسية";

/// Navigation state over the fetched content tree. Owns the current step,
/// the selection slots, and the loading flag; all mutation happens through
/// the operations below, never from the outside.
#[derive(Clone, Debug, Default)]
pub struct Browser {
    catalog: Vec<Arc<Year>>,
    selection: Selection,
    step: Step,
    loading: bool,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn years(&self) -> &[Arc<Year>] {
        &self.catalog
    }

    /// Fetch the content tree and start over from the subject list. Failure
    /// is logged and swallowed; the previous tree and selection stay as they
    /// were. Either the whole state is replaced or none of it.
    pub fn load(&mut self, source: &impl FetchCatalog) {
        self.loading = true;
        match source.fetch_catalog() {
            Ok(years) => self.install(years),
            Err(err) => {
                log::warn!("failed to fetch content: {}", err);
                self.loading = false;
            }
        }
    }

    /// Same contract as `load`. Concurrent calls are not deduplicated or
    /// cancelled; whichever response lands last wins.
    pub fn refresh(&mut self, source: &impl FetchCatalog) {
        self.load(source);
    }

    fn install(&mut self, years: Vec<Arc<Year>>) {
        // There is no year picker; the first year in the document is the
        // one on display.
        self.selection = Selection {
            year: years.first().cloned(),
            ..Selection::default()
        };
        self.catalog = years;
        self.step = Step::Subjects;
        self.loading = false;
    }

    pub fn select_subject(&mut self, subject: Arc<Subject>) {
        self.selection.subject.replace(subject);
        self.selection.teacher.take();
        self.selection.chapter.take();
        self.selection.lecture.take();
        self.step = Step::Teachers;
    }

    pub fn select_teacher(&mut self, teacher: Arc<Teacher>) {
        self.selection.teacher.replace(teacher);
        self.selection.chapter.take();
        self.selection.lecture.take();
        self.step = Step::Chapters;
    }

    pub fn select_chapter(&mut self, chapter: Arc<Chapter>) {
        self.selection.chapter.replace(chapter);
        self.selection.lecture.take();
        self.step = Step::Lectures;
    }

    pub fn select_lecture(&mut self, lecture: Arc<Lecture>) {
        self.selection.lecture.replace(lecture);
        self.step = Step::Videos;
    }

    /// Breadcrumb jump. Only the step changes; the selection keeps whatever
    /// was chosen before, so jumping back re-renders the same lists. Jumping
    /// forward past an empty slot is allowed and renders an empty list.
    pub fn navigate_to(&mut self, step: Step) {
        self.step = step;
    }

    /// Subjects of the displayed year in the platform's fixed order, or
    /// nothing before the first successful load.
    pub fn subjects(&self) -> Vec<Arc<Subject>> {
        self.selection
            .year
            .as_ref()
            .map(|year| catalog::sorted_subjects(year))
            .unwrap_or_default()
    }

    pub fn teachers(&self) -> &[Arc<Teacher>] {
        self.selection
            .subject
            .as_ref()
            .map(|subject| subject.teachers.as_slice())
            .unwrap_or(&[])
    }

    pub fn chapters(&self) -> &[Arc<Chapter>] {
        self.selection
            .teacher
            .as_ref()
            .map(|teacher| teacher.chapters.as_slice())
            .unwrap_or(&[])
    }

    pub fn lectures(&self) -> &[Arc<Lecture>] {
        self.selection
            .chapter
            .as_ref()
            .map(|chapter| chapter.lectures.as_slice())
            .unwrap_or(&[])
    }

    pub fn videos(&self) -> &[Arc<Video>] {
        self.selection
            .lecture
            .as_ref()
            .map(|lecture| lecture.videos.as_slice())
            .unwrap_or(&[])
    }

    /// Crumb trail for the current position. Home is always present; each
    /// deeper crumb appears once its slot is filled and the step has moved
    /// past it.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut crumbs = vec![Breadcrumb {
            target: Step::Subjects,
            label: Arc::from(HOME_LABEL),
        }];
        if let Some(subject) = &self.selection.subject {
            if self.step != Step::Subjects {
                crumbs.push(Breadcrumb {
                    target: Step::Teachers,
                    label: subject.subject_name.clone(),
                });
            }
        }
        if let Some(teacher) = &self.selection.teacher {
            if matches!(self.step, Step::Chapters | Step::Lectures | Step::Videos) {
                crumbs.push(Breadcrumb {
                    target: Step::Chapters,
                    label: teacher.teacher_name.clone(),
                });
            }
        }
        if let Some(chapter) = &self.selection.chapter {
            if matches!(self.step, Step::Lectures | Step::Videos) {
                crumbs.push(Breadcrumb {
                    target: Step::Lectures,
                    label: chapter.chapter_name.clone(),
                });
            }
        }
        crumbs
    }
}
