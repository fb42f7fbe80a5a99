use axum::{
    Router, debug_handler,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::{
    ApiError, ApiResult, AppState,
    models::{Education, Project, Skill},
    store::{Collection, Store},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/resume/generate", get(generate_resume))
}

#[debug_handler]
pub(crate) async fn generate_resume(State(store): State<Store>) -> ApiResult<Response> {
    let skills: Vec<Skill> = store.list(Collection::Skills).await;
    let projects: Vec<Project> = store.list(Collection::Projects).await;
    let education: Vec<Education> = store.list(Collection::Education).await;

    let bytes = render(&skills, &projects, &education)
        .map_err(|e| ApiError::internal("Failed to generate resume", e))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.pdf\"",
            ),
        ],
        bytes,
    )
        .into_response())
}

const FULL_NAME: &str = "John Doe";
const HEADLINE: &str = "Full-Stack Developer & Photographer";
const EMAIL: &str = "john@johndoe-portfolio.com";
const LOCATION: &str = "New York, NY";
const WEBSITE: &str = "https://johndoe-portfolio.com";
const SUMMARY: &str = "Full-stack developer with a focus on interactive web experiences, \
backed by a parallel practice in landscape photography. Comfortable owning a product from \
data model to pixels.";

struct Experience {
    role: &'static str,
    company: &'static str,
    period: &'static str,
    summary: &'static str,
}

const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Senior Software Engineer",
        company: "Nimbus Labs",
        period: "2022 - present",
        summary: "Leads a three-person team building customer-facing web tooling; owns the \
service layer and its storage backends.",
    },
    Experience {
        role: "Software Engineer",
        company: "Brightline Studio",
        period: "2019 - 2022",
        summary: "Built and operated client portfolio sites and the shared component library \
behind them.",
    },
];

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 20.0;
const WRAP_COLUMNS: usize = 90;

/// One A4 sheet with a downward-moving cursor. Page breaks happen inside
/// `put`, so callers just emit lines top to bottom.
struct Sheet {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f64,
}

impl Sheet {
    fn new() -> anyhow::Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new("Resume", Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "content");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    fn put(&mut self, text: &str, size: f64, line_mm: f64, bold: bool) {
        self.advance(line_mm);
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size as f32, Mm(MARGIN_MM as f32), Mm(self.y as f32), font);
    }

    fn heading(&mut self, text: &str) {
        self.gap(3.0);
        self.put(text, 14.0, 9.0, true);
    }

    fn entry(&mut self, text: &str) {
        self.put(text, 11.0, 6.5, true);
    }

    fn body(&mut self, text: &str) {
        self.put(text, 10.0, 5.0, false);
    }

    fn paragraph(&mut self, text: &str) {
        for line in wrap(text, WRAP_COLUMNS) {
            self.body(&line);
        }
    }

    fn gap(&mut self, mm: f64) {
        self.y -= mm;
    }

    fn advance(&mut self, line_mm: f64) {
        if self.y - line_mm < MARGIN_MM {
            let (page, layer) =
                self.doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        } else {
            self.y -= line_mm;
        }
    }

    fn finish(self) -> anyhow::Result<Vec<u8>> {
        Ok(self.doc.save_to_bytes()?)
    }
}

fn render(
    skills: &[Skill],
    projects: &[Project],
    education: &[Education],
) -> anyhow::Result<Vec<u8>> {
    let mut sheet = Sheet::new()?;

    sheet.put(FULL_NAME, 22.0, 11.0, true);
    sheet.body(HEADLINE);
    sheet.body(&format!("{EMAIL} | {LOCATION} | {WEBSITE}"));

    sheet.heading("Summary");
    sheet.paragraph(SUMMARY);

    sheet.heading("Experience");
    for e in EXPERIENCE {
        sheet.entry(&format!("{}, {} ({})", e.role, e.company, e.period));
        sheet.paragraph(e.summary);
        sheet.gap(2.0);
    }

    sheet.heading("Skills");
    for (category, names) in group_by_category(skills) {
        sheet.body(&format!("{category}: {}", names.join(", ")));
    }

    sheet.heading("Projects");
    for p in projects {
        sheet.entry(&p.title);
        sheet.paragraph(&p.description);
        if !p.technologies.is_empty() {
            sheet.body(&format!("Technologies: {}", p.technologies.join(", ")));
        }
        sheet.gap(2.0);
    }

    sheet.heading("Education & Certifications");
    for e in education {
        sheet.entry(&e.degree);
        sheet.body(&format!("{} ({})", e.school, e.year));
        sheet.paragraph(&e.description);
        sheet.gap(2.0);
    }

    sheet.finish()
}

/// Categories in first-seen order, each skill as "name (level%)".
fn group_by_category(skills: &[Skill]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for skill in skills {
        let label = format!("{} ({}%)", skill.name, skill.level);
        match groups.iter_mut().find(|(c, _)| *c == skill.category) {
            Some((_, names)) => names.push(label),
            None => groups.push((skill.category.clone(), vec![label])),
        }
    }
    groups
}

fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > columns {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
