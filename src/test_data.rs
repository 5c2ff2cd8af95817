#[cfg(test)]
pub const PAGE_JSON: &str = r#"{
  "results": [
    {
      "uid": "how-to-use-hooks",
      "first_publication_date": "2021-03-15T19:25:28+00:00",
      "data": {
        "title": "How to use hooks",
        "subtitle": "A practical introduction",
        "author": "Joseph Oliveira"
      }
    },
    {
      "uid": "creating-a-cra-app-from-scratch",
      "first_publication_date": "2021-03-25T19:27:35+00:00",
      "data": {
        "title": "Creating a CRA app from scratch",
        "subtitle": "All the plumbing nobody shows you",
        "author": "Danilo Vieira"
      }
    }
  ],
  "next_page": "https://content.example.dev/api/posts?page=2"
}"#;

#[cfg(test)]
pub const LAST_PAGE_JSON: &str = r#"{
  "results": [
    {
      "uid": "under-the-hood",
      "first_publication_date": null,
      "data": {
        "title": "Under the hood",
        "subtitle": "What the bundler actually does",
        "author": "Joseph Oliveira"
      }
    }
  ],
  "next_page": null
}"#;

#[cfg(test)]
pub const DOCUMENT_JSON: &str = r#"{
  "first_publication_date": "2021-03-15T19:25:28+00:00",
  "data": {
    "title": "How to use hooks",
    "banner": {
      "url": "https://images.example.dev/banner.png"
    },
    "author": "Joseph Oliveira",
    "content": [
      {
        "heading": "Starting out",
        "body": [
          { "text": "Hooks let you use state without writing a class." },
          { "text": "They were introduced to avoid wrapper hell." }
        ]
      },
      {
        "heading": "Going further",
        "body": [
          { "text": "Rules of hooks apply everywhere." }
        ]
      }
    ]
  }
}"#;
