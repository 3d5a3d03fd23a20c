//! HTML rendering for every page of the site.
//!
//! Pages share one layout (head, navigation, footer). Anything that came from
//! a visitor or the database goes through [`escape`] before it is written.

use axum::response::Html;

use crate::projects::Project;

const SITE_OWNER: &str = "Andrew Meek";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Home,
    About,
    Resume,
    Projects,
    Contact,
    None,
}

const NAV_LINKS: [(Nav, &str, &str); 5] = [
    (Nav::Home, "/", "Home"),
    (Nav::About, "/about", "About"),
    (Nav::Resume, "/resume", "Resume"),
    (Nav::Projects, "/projects", "Projects"),
    (Nav::Contact, "/contact", "Contact"),
];

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, active: Nav, body: &str) -> Html<String> {
    let nav: String = NAV_LINKS
        .iter()
        .map(|(item, href, label)| {
            let class = if *item == active { " class=\"active\"" } else { "" };
            format!("<li><a href=\"{href}\"{class}>{label}</a></li>")
        })
        .collect();

    Html(format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
<title>{title} | {owner}</title>
<link rel=\"stylesheet\" href=\"/static/css/site.css\">
</head>
<body>
<header><nav><ul>{nav}</ul></nav></header>
<main>
{body}
</main>
<footer><p>&copy; {owner}</p></footer>
</body>
</html>
",
        title = escape(title),
        owner = SITE_OWNER,
    ))
}

fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|msg| format!("<li>{}</li>", escape(msg)))
        .collect();
    format!("<ul class=\"errors\" role=\"alert\">{items}</ul>\n")
}

pub fn home() -> Html<String> {
    layout(
        "Home",
        Nav::Home,
        &format!(
            "<section class=\"hero\">
<h1>Hi, I'm {SITE_OWNER}</h1>
<p>I build web applications and data projects, and I like turning messy data into something people can use.</p>
<p><a class=\"button\" href=\"/projects\">See my projects</a> <a class=\"button\" href=\"/contact\">Get in touch</a></p>
</section>"
        ),
    )
}

pub fn about() -> Html<String> {
    layout(
        "About",
        Nav::About,
        "<h1>About Me</h1>
<p>I am a student developer at Indiana University working across the stack: back-end services,
relational databases and the front-end code that ties them together.</p>
<p>Outside of class I follow football far too closely, which is how my forecasting project started.</p>",
    )
}

pub fn resume() -> Html<String> {
    layout(
        "Resume",
        Nav::Resume,
        "<h1>Resume</h1>
<section>
<h2>Education</h2>
<p>Indiana University, Bloomington</p>
</section>
<section>
<h2>Skills</h2>
<ul>
<li>Python, SQL, JavaScript, HTML and CSS</li>
<li>Web frameworks and relational databases</li>
<li>Data analysis and visualization</li>
</ul>
</section>",
    )
}

pub fn projects(projects: &[Project]) -> Html<String> {
    let cards: String = if projects.is_empty() {
        "<p class=\"empty\">No projects yet.</p>\n".to_string()
    } else {
        projects
            .iter()
            .map(|p| {
                let image = if p.image_file_name.is_empty() {
                    String::new()
                } else {
                    format!(
                        "<img src=\"/static/images/{}\" alt=\"{}\">\n",
                        escape(&p.image_file_name),
                        escape(&p.title)
                    )
                };
                format!(
                    "<article class=\"project\" id=\"project-{id}\">
{image}<h2>{title}</h2>
<p>{description}</p>
</article>
",
                    id = p.id,
                    title = escape(&p.title),
                    description = escape(&p.description),
                )
            })
            .collect()
    };

    layout(
        "Projects",
        Nav::Projects,
        &format!(
            "<h1>Projects</h1>
<p><a class=\"button\" href=\"/projects/new\">Add a project</a></p>
<div class=\"projects\">
{cards}</div>"
        ),
    )
}

pub fn new_project_form(errors: &[String]) -> Html<String> {
    layout(
        "New Project",
        Nav::Projects,
        &format!(
            "<h1>Add a Project</h1>
{errors}<form method=\"post\" action=\"/projects/new\">
<label for=\"title\">Title</label>
<input type=\"text\" id=\"title\" name=\"title\" required>
<label for=\"description\">Description</label>
<textarea id=\"description\" name=\"description\" rows=\"4\"></textarea>
<label for=\"image_file_name\">Image file name</label>
<input type=\"text\" id=\"image_file_name\" name=\"image_file_name\" placeholder=\"project.png\">
<button type=\"submit\">Add project</button>
</form>",
            errors = error_list(errors)
        ),
    )
}

pub fn contact_form(errors: &[String]) -> Html<String> {
    layout(
        "Contact",
        Nav::Contact,
        &format!(
            "<h1>Contact Me</h1>
{errors}<form method=\"post\" action=\"/contact\">
<label for=\"first_name\">First name</label>
<input type=\"text\" id=\"first_name\" name=\"first_name\" required>
<label for=\"last_name\">Last name</label>
<input type=\"text\" id=\"last_name\" name=\"last_name\" required>
<label for=\"email\">Email</label>
<input type=\"email\" id=\"email\" name=\"email\" required>
<label for=\"password\">Password</label>
<input type=\"password\" id=\"password\" name=\"password\" minlength=\"8\" required>
<label for=\"confirm_password\">Confirm password</label>
<input type=\"password\" id=\"confirm_password\" name=\"confirm_password\" minlength=\"8\" required>
<button type=\"submit\">Send</button>
</form>",
            errors = error_list(errors)
        ),
    )
}

pub fn thank_you() -> Html<String> {
    layout(
        "Thank You",
        Nav::Contact,
        "<h1>Thank you!</h1>
<p>Your message has been received. I'll get back to you soon.</p>
<p><a href=\"/\">Back to home</a></p>",
    )
}

pub fn not_found() -> Html<String> {
    layout(
        "Not Found",
        Nav::None,
        "<h1>Page not found</h1>
<p>That page doesn't exist. <a href=\"/\">Go home</a>.</p>",
    )
}

pub fn server_error() -> Html<String> {
    layout(
        "Error",
        Nav::None,
        "<h1>Something went wrong</h1>
<p>Please try again later.</p>",
    )
}
