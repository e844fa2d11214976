//! Entity builders for sections made of repeated H3 entries.
//!
//! At most one entity is under construction at a time. It is opened by an
//! H3 heading, fed the lines that follow, and flushed into its section when
//! the next H3, the next H2, or the end of input arrives.

use super::fields::{
    apply_first, parse_date_range, parse_gpa, parse_location, parse_single_date,
    parse_titled_link, pipe_segments, split_list, Rule,
};
use super::patterns::{
    classify_line, italic_text, split_on_dash, LineKind, BOLD, DATE_SINGLE, THESIS,
};
use crate::model::{DateRange, Education, Experience, Location, Project, Thesis};

/// Progress of an education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EducationPhase {
    /// The next non-bullet line is the dates / location / GPA line
    AwaitingMeta,
    /// Metadata seen; only bullets contribute
    Body,
}

/// The entity currently under construction.
#[derive(Debug, Clone)]
pub(crate) enum OpenEntity {
    Experience(Experience),
    Education(Education, EducationPhase),
    Project(Project),
}

impl OpenEntity {
    /// Open an experience entry from its H3 text (the job title).
    pub(crate) fn experience(heading: &str) -> Self {
        OpenEntity::Experience(Experience::new(heading))
    }

    /// Open an education entry from `Institution — Degree`.
    pub(crate) fn education(heading: &str) -> Self {
        let (institution, degree) = split_on_dash(heading);
        let mut entry = Education {
            institution: institution.to_string(),
            ..Default::default()
        };
        if let Some(degree) = degree {
            entry.degree.name = degree.to_string();
        }
        OpenEntity::Education(entry, EducationPhase::AwaitingMeta)
    }

    /// Open a project from `Name — [label](url)`.
    pub(crate) fn project(heading: &str) -> Self {
        let (name, link) = parse_titled_link(heading);
        OpenEntity::Project(Project {
            name,
            link,
            ..Default::default()
        })
    }

    /// Feed one trimmed, non-blank line into the entity.
    pub(crate) fn accept(&mut self, line: &str) {
        let consumed = match self {
            OpenEntity::Experience(exp) => apply_first(line, exp, EXPERIENCE_LINE_RULES),
            OpenEntity::Education(edu, phase) => {
                let is_bullet = matches!(classify_line(line), LineKind::Bullet(_));
                if *phase == EducationPhase::AwaitingMeta && !is_bullet {
                    *phase = EducationPhase::Body;
                    parse_education_meta(line, edu);
                    true
                } else {
                    education_bullet(line, edu)
                }
            }
            OpenEntity::Project(proj) => apply_first(line, proj, PROJECT_LINE_RULES),
        };
        if !consumed {
            log::trace!("Ignoring line inside entry: {:?}", line);
        }
    }
}

/// Entities with a date range and a location.
trait Timeline {
    fn dates_mut(&mut self) -> &mut DateRange;
    fn set_location(&mut self, location: Location);
}

impl Timeline for Experience {
    fn dates_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }

    fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }
}

impl Timeline for Education {
    fn dates_mut(&mut self) -> &mut DateRange {
        &mut self.dates
    }

    fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }
}

// A failed date parse never overwrites a value that is already set.

fn meta_date_range<T: Timeline>(segment: &str, target: &mut T) -> bool {
    let Some(found) = parse_date_range(segment) else {
        return false;
    };
    let dates = target.dates_mut();
    if found.start.is_some() {
        dates.start = found.start;
    }
    if found.end.is_some() {
        dates.end = found.end;
    }
    true
}

fn meta_single_date<T: Timeline>(segment: &str, target: &mut T) -> bool {
    if !DATE_SINGLE.is_match(segment) {
        return false;
    }
    if let Some(start) = parse_single_date(segment) {
        target.dates_mut().start = Some(start);
    }
    true
}

fn meta_location<T: Timeline>(segment: &str, target: &mut T) -> bool {
    target.set_location(parse_location(segment));
    true
}

/// Education only reads a location from segments that hold a comma or no digits.
fn meta_guarded_location(segment: &str, edu: &mut Education) -> bool {
    if segment.contains(',') || !segment.chars().any(|c| c.is_ascii_digit()) {
        return meta_location(segment, edu);
    }
    false
}

fn meta_gpa(segment: &str, edu: &mut Education) -> bool {
    match parse_gpa(segment) {
        Some(gpa) => {
            edu.gpa = Some(gpa);
            true
        }
        None => false,
    }
}

const EXPERIENCE_META_RULES: &[Rule<Experience>] = &[
    meta_date_range::<Experience>,
    meta_single_date::<Experience>,
    meta_location::<Experience>,
];

const EDUCATION_META_RULES: &[Rule<Education>] = &[
    meta_gpa,
    meta_date_range::<Education>,
    meta_single_date::<Education>,
    meta_guarded_location,
];

const EXPERIENCE_LINE_RULES: &[Rule<Experience>] =
    &[experience_company, experience_technologies, experience_highlight];

const PROJECT_LINE_RULES: &[Rule<Project>] =
    &[project_dates, project_technologies, project_highlight];

/// `**Company** | dates | location`
fn experience_company(line: &str, exp: &mut Experience) -> bool {
    if !line.starts_with("**") {
        return false;
    }
    let mut segments = line.split('|');
    if let Some(caps) = segments.next().and_then(|first| BOLD.captures(first)) {
        exp.company = caps[1].trim().to_string();
    }
    for segment in segments.map(str::trim).filter(|s| !s.is_empty()) {
        apply_first(segment, exp, EXPERIENCE_META_RULES);
    }
    true
}

fn experience_technologies(line: &str, exp: &mut Experience) -> bool {
    match italic_text(line) {
        Some(text) => {
            exp.technologies.extend(split_list(text));
            true
        }
        None => false,
    }
}

fn experience_highlight(line: &str, exp: &mut Experience) -> bool {
    match classify_line(line) {
        LineKind::Bullet(text) => {
            exp.highlights.push(text.to_string());
            true
        }
        _ => false,
    }
}

/// `dates | location | GPA: X / Y`, in any order.
fn parse_education_meta(line: &str, edu: &mut Education) {
    for segment in pipe_segments(line) {
        apply_first(segment, edu, EDUCATION_META_RULES);
    }
}

/// A bullet is either `**Thesis:** Title — [label](url)` or a description.
fn education_bullet(line: &str, edu: &mut Education) -> bool {
    let LineKind::Bullet(content) = classify_line(line) else {
        return false;
    };

    if let Some(caps) = THESIS.captures(content) {
        let (title, link) = parse_titled_link(caps[1].trim());
        edu.thesis = Some(Thesis {
            title,
            link,
            highlights: Vec::new(),
        });
        return true;
    }

    edu.degree.descriptions.push(content.to_string());
    true
}

fn project_highlight(line: &str, proj: &mut Project) -> bool {
    match classify_line(line) {
        LineKind::Bullet(text) => {
            proj.highlights.push(text.to_string());
            true
        }
        _ => false,
    }
}

fn project_technologies(line: &str, proj: &mut Project) -> bool {
    match italic_text(line) {
        Some(text) => {
            proj.technologies.extend(split_list(text));
            true
        }
        None => false,
    }
}

/// Dates are only recorded when the start month parsed.
fn project_dates(line: &str, proj: &mut Project) -> bool {
    let Some(found) = parse_date_range(line) else {
        return false;
    };
    if found.start.is_some() {
        proj.dates = Some(found);
    }
    true
}
