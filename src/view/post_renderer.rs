use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::content::PostDocument;
use crate::reading_time;
use crate::text_utils::format_publication_date;

/// Render state of the detail view. Either the document resolved or it did
/// not yet; there is no "ready but empty" combination.
pub enum DetailView {
    Loading,
    Ready(PostDocument),
}

impl DetailView {
    /// 0 while loading, in which case no time is displayed at all.
    pub fn estimated_minutes(&self) -> u32 {
        match self {
            DetailView::Loading => 0,
            DetailView::Ready(document) => reading_time::estimate(&document.sections),
        }
    }
}

#[derive(ramhorns::Content)]
struct DetailPage<'a> {
    loading: bool,
    title: &'a str,
    banner_url: &'a str,
    author: &'a str,
    date: String,
    read_time: u32,
    sections: Vec<ViewSection<'a>>,
}

#[derive(ramhorns::Content)]
struct ViewSection<'a> {
    heading: &'a str,
    paragraphs: Vec<ViewParagraph<'a>>,
}

#[derive(ramhorns::Content)]
struct ViewParagraph<'a> {
    text: &'a str,
}

pub struct PostRenderer<'a> {
    template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<PostRenderer> {
        let template = match Template::new(view_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing post view template: {}", e)));
            }
        };

        Ok(PostRenderer {
            template,
        })
    }

    pub fn render(&self, view: &DetailView) -> String {
        let document = match view {
            DetailView::Loading => {
                return self.template.render(&DetailPage {
                    loading: true,
                    title: "",
                    banner_url: "",
                    author: "",
                    date: String::new(),
                    read_time: 0,
                    sections: vec![],
                });
            }
            DetailView::Ready(document) => document,
        };

        let sections = document.sections.iter().map(|section| ViewSection {
            heading: section.heading.as_str(),
            paragraphs: section.body.iter()
                .map(|block| ViewParagraph { text: block.0.as_str() })
                .collect(),
        }).collect();

        self.template.render(&DetailPage {
            loading: false,
            title: document.title.as_str(),
            banner_url: document.banner_url.as_str(),
            author: document.author.as_str(),
            date: format_publication_date(document.publication_date.as_ref()),
            read_time: view.estimated_minutes(),
            sections,
        })
    }
}
