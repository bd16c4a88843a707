use std::io::{self, BufRead};

use itertools::Itertools;

use fullmark_core::{
    browser::{Browser, Step},
    config::Config,
    profile::StudentProfile,
    source::ContentSource,
};

fn main() {
    env_logger::init();

    let config = Config::load().unwrap_or_default();
    let source = ContentSource::new(config.endpoint_url());

    let mut browser = Browser::new();
    browser.load(&source);
    render(&browser);

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        match line.trim() {
            "q" => break,
            "r" => {
                if browser.step() == Step::Subjects {
                    browser.refresh(&source);
                } else {
                    log::warn!("refresh is only available at the top level");
                }
            }
            "h" => browser.navigate_to(Step::Subjects),
            "b" => {
                if let Some(step) = browser.step().back() {
                    browser.navigate_to(step);
                }
            }
            "p" => print_profile(&StudentProfile::demo()),
            "" => {}
            input => match input.parse::<usize>() {
                Ok(number) if number >= 1 => select(&mut browser, number - 1),
                _ => log::warn!("unknown command"),
            },
        }
        render(&browser);
    }
}

fn select(browser: &mut Browser, index: usize) {
    match browser.step() {
        Step::Subjects => {
            if let Some(subject) = browser.subjects().get(index).cloned() {
                browser.select_subject(subject);
            }
        }
        Step::Teachers => {
            if let Some(teacher) = browser.teachers().get(index).cloned() {
                browser.select_teacher(teacher);
            }
        }
        Step::Chapters => {
            if let Some(chapter) = browser.chapters().get(index).cloned() {
                browser.select_chapter(chapter);
            }
        }
        Step::Lectures => {
            if let Some(lecture) = browser.lectures().get(index).cloned() {
                browser.select_lecture(lecture);
            }
        }
        Step::Videos => {
            // Videos are terminal; picking one plays it in the browser.
            if let Some(video) = browser.videos().get(index).cloned() {
                if let Err(err) = open::that(&*video.url) {
                    log::warn!("failed to open {}: {}", video.url, err);
                }
            }
        }
    }
}

fn render(browser: &Browser) {
    let trail = browser
        .breadcrumbs()
        .iter()
        .map(|crumb| crumb.label.to_string())
        .join(" ‹ ");
    println!();
    println!("{} — {}", browser.step().title(), trail);

    match browser.step() {
        Step::Subjects => {
            for (i, subject) in browser.subjects().iter().enumerate() {
                println!(
                    "{:2}. {} ({} مدرس)",
                    i + 1,
                    subject.subject_name,
                    subject.teachers.len()
                );
            }
        }
        Step::Teachers => {
            for (i, teacher) in browser.teachers().iter().enumerate() {
                println!(
                    "{:2}. {} ({} فصل)",
                    i + 1,
                    teacher.teacher_name,
                    teacher.chapters.len()
                );
            }
        }
        Step::Chapters => {
            for (i, chapter) in browser.chapters().iter().enumerate() {
                println!(
                    "{:2}. {} ({} محاضرة)",
                    i + 1,
                    chapter.chapter_name,
                    chapter.lectures.len()
                );
            }
        }
        Step::Lectures => {
            for (i, lecture) in browser.lectures().iter().enumerate() {
                println!(
                    "{:2}. {} ({} فيديو)",
                    i + 1,
                    lecture.lecture_name,
                    lecture.videos.len()
                );
            }
        }
        Step::Videos => {
            for (i, video) in browser.videos().iter().enumerate() {
                println!("{:2}. {} — {}", i + 1, video.display_name(i), video.url);
            }
        }
    }
}

fn print_profile(student: &StudentProfile) {
    println!();
    println!("{}", student.name);
    println!("الكود: {}", student.code);
    println!("الشعبة: {}", student.division);
    println!("الصف: {}", student.year);
    println!("تاريخ الانضمام: {}", student.join_date);
}
