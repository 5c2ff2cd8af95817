use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::content::PostSummary;
use crate::text_utils::format_publication_date;

#[derive(ramhorns::Content)]
struct ListPage {
    posts: Vec<ListItem>,
    show_load_more: bool,
}

#[derive(ramhorns::Content)]
struct ListItem {
    link: String,
    title: String,
    subtitle: String,
    author: String,
    date: String,
}

pub struct ListRenderer<'a> {
    template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer> {
        let template = match Template::new(list_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e)));
            }
        };

        Ok(ListRenderer {
            template,
        })
    }

    pub fn render(&self, posts: &[PostSummary], show_load_more: bool) -> String {
        let posts = posts.iter().map(|post| ListItem {
            link: format!("/post/{}/", post.key.0),
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            author: post.author.clone(),
            date: format_publication_date(post.publication_date.as_ref()),
        }).collect();

        self.template.render(&ListPage {
            posts,
            show_load_more,
        })
    }
}
