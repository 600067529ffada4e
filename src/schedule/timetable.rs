use chrono::{Days, NaiveDate};
use super::types::{ChapterWorkItem, Subject, Timetable, TimetableEntry};
use super::quota::{chapters_per_day, hours_per_chapter};

/// Builds a day-by-day study timetable leading up to the nearest exam.
///
/// Chapters of subjects with sooner exams come first. Every scheduled day gets
/// the same chapter quota, and scheduling stops the day before the earliest exam,
/// so chapters that do not fit in that window are left out.
pub fn generate_timetable(today: NaiveDate, subjects: &[Subject], study_hours_per_day: i64) -> Timetable {
    // Drop subjects with no chapters or an exam that is today or already past
    let eligible: Vec<&Subject> = subjects
        .iter()
        .filter(|s| s.is_eligible(today))
        .collect();

    let earliest_exam_date = match eligible.iter().map(|s| s.exam_date).min() {
        Some(date) => date,
        None => return Vec::new(),
    };
    let total_days = (earliest_exam_date - today).num_days();

    let chapter_list = prioritized_chapters(today, &eligible);
    let per_day = chapters_per_day(chapter_list.len(), total_days);
    let hours = hours_per_chapter(study_hours_per_day, per_day);

    let mut timetable = Vec::with_capacity(chapter_list.len());
    let mut assigned = 0;
    let mut day = today;

    while assigned < chapter_list.len() && day < earliest_exam_date {
        for item in chapter_list[assigned..].iter().take(per_day) {
            timetable.push(TimetableEntry {
                date: day,
                subject: item.subject.clone(),
                chapter: item.chapter.clone(),
                hours,
            });
            assigned += 1;
        }
        day = match day.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    timetable
}

/// Flattens every chapter of the given subjects and orders them by days left
/// until their own exam. The sort is stable, so ties keep input order.
fn prioritized_chapters(today: NaiveDate, subjects: &[&Subject]) -> Vec<ChapterWorkItem> {
    let mut chapter_list: Vec<ChapterWorkItem> = subjects
        .iter()
        .flat_map(|s| {
            let days_left = (s.exam_date - today).num_days();
            s.chapters.iter().map(move |chapter| ChapterWorkItem {
                subject: s.name.clone(),
                chapter: chapter.clone(),
                days_left,
            })
        })
        .collect();

    chapter_list.sort_by_key(|c| c.days_left);
    chapter_list
}
