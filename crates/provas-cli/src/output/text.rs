//! Indented tree rendering of the browse views.

use std::fmt::Write;

use provas_client::pages::{DisciplinesPage, FormOptions, InstructorsPage};
use provas_core::entities::{Category, Discipline, TeacherAssignment, TermView};
use provas_core::index::{RowLabel, Sections, category_sections};

use super::RenderText;

const INDENT: &str = "  ";

fn push_sections(
    out: &mut String,
    categories: &[Category],
    scope: &[TeacherAssignment],
    label: RowLabel,
    empty_message: &str,
    depth: usize,
) {
    let pad = INDENT.repeat(depth);
    match category_sections(categories, scope, label) {
        Sections::NoExams => {
            let _ = writeln!(out, "{pad}{empty_message}");
        }
        Sections::Categories(sections) => {
            for section in sections {
                let _ = writeln!(out, "{pad}{}", section.category.name);
                for row in section.rows {
                    let _ = writeln!(
                        out,
                        "{pad}{INDENT}[{}] {} - {} views",
                        row.exam.id,
                        row.title(),
                        row.exam.view_count()
                    );
                }
            }
        }
    }
}

fn push_term(out: &mut String, term: &TermView, categories: &[Category]) {
    let _ = writeln!(out, "{}", term.label());
    if term.is_empty() {
        let _ = writeln!(out, "{INDENT}{}", TermView::EMPTY_MESSAGE);
        return;
    }
    for discipline in &term.disciplines {
        let _ = writeln!(out, "{INDENT}{}", discipline.name);
        push_sections(
            out,
            categories,
            &discipline.assignments,
            RowLabel::Teacher,
            Discipline::EMPTY_MESSAGE,
            2,
        );
    }
}

impl RenderText for DisciplinesPage {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for term in &self.terms {
            push_term(&mut out, term, &self.categories);
        }
        out.trim_end().to_string()
    }
}

impl RenderText for InstructorsPage {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for teacher in &self.teachers {
            let _ = writeln!(out, "{}", teacher.name);
            push_sections(
                &mut out,
                &self.categories,
                teacher.scope(),
                RowLabel::Discipline,
                Discipline::EMPTY_MESSAGE,
                1,
            );
        }
        out.trim_end().to_string()
    }
}

impl RenderText for FormOptions {
    fn render_text(&self) -> String {
        self.teachers.join("\n")
    }
}

impl RenderText for Vec<Category> {
    fn render_text(&self) -> String {
        self.iter()
            .map(|category| format!("{}\t{}", category.id, category.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use provas_core::entities::{CategoryRef, Exam, ExamCount, Teacher};
    use provas_core::projection::project_by_teacher;

    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: 1,
                name: "P1".into(),
            },
            Category {
                id: 2,
                name: "P2".into(),
            },
        ]
    }

    fn assignment(id: u64, teacher: &str, exams: &[(u64, &str, u64)]) -> TeacherAssignment {
        TeacherAssignment {
            id,
            discipline: None,
            teacher: Teacher {
                id,
                name: teacher.into(),
            },
            tests: exams
                .iter()
                .map(|&(exam_id, name, category)| Exam {
                    id: exam_id,
                    name: name.into(),
                    pdf_url: format!("https://files/{exam_id}.pdf"),
                    category: CategoryRef {
                        id: category,
                        name: None,
                    },
                    count: ExamCount { views: 2 },
                })
                .collect(),
        }
    }

    #[test]
    fn disciplines_tree_shows_empty_messages() {
        let page = DisciplinesPage {
            terms: vec![
                TermView {
                    id: 1,
                    number: 1,
                    disciplines: vec![
                        Discipline {
                            id: 1,
                            name: "HTML".into(),
                            term: None,
                            assignments: vec![assignment(1, "Ana", &[(11, "Globo", 2)])],
                        },
                        Discipline {
                            id: 2,
                            name: "React".into(),
                            term: None,
                            assignments: vec![],
                        },
                    ],
                },
                TermView {
                    id: 2,
                    number: 2,
                    disciplines: vec![],
                },
            ],
            categories: categories(),
        };

        let expected = [
            "1 Período",
            "  HTML",
            "    P2",
            "      [11] Globo (Ana) - 2 views",
            "  React",
            "    Nenhuma prova para essa disciplina...",
            "2 Período",
            "  Nenhuma prova para esse período...",
        ]
        .join("\n");
        assert_eq!(page.render_text(), expected);
    }

    #[test]
    fn instructors_tree_lists_each_name_once() {
        let page = InstructorsPage {
            teachers: project_by_teacher(vec![
                assignment(1, "Ana", &[(11, "Globo", 1)]),
                assignment(2, "Ana", &[(12, "Trivia", 1)]),
            ]),
            categories: categories(),
        };

        let expected = ["Ana", "  P1", "    [11] Globo - 2 views", "    [12] Trivia - 2 views"]
            .join("\n");
        assert_eq!(page.render_text(), expected);
    }
}
