//! `show` handler: fetch one person by ID or `/user/{id}` path.

use rolodex_core::{Directory, Person, PersonId, Route};

use crate::cli::{GlobalOpts, ShowArgs};
use crate::error::CliError;
use crate::output::{self, heading, label};

/// Accept `7`, `abc`, or a detail path such as `/user/7`.
fn parse_target(target: &str) -> Result<PersonId, CliError> {
    let target = target.trim();
    if !target.starts_with('/') {
        if target.is_empty() {
            return Err(CliError::Validation {
                field: "target".into(),
                reason: "person ID cannot be empty".into(),
            });
        }
        return Ok(PersonId::from(target));
    }

    match target.parse::<Route>() {
        Ok(Route::Person(id)) => Ok(id),
        Ok(Route::Directory) => Err(CliError::Validation {
            field: "target".into(),
            reason: "'/' is the list view; use `rolodex list`".into(),
        }),
        Err(e) => Err(CliError::Validation {
            field: "target".into(),
            reason: e.to_string(),
        }),
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn detail(p: &Person, color: bool) -> String {
    let title = if p.username.is_empty() {
        p.name.clone()
    } else {
        format!("{} (@{})", p.name, p.username)
    };

    let mut lines = vec![
        heading(&title, color),
        format!("{}       {}", label("ID:", color), p.id),
        format!("{}    {}", label("Email:", color), or_dash(&p.email)),
        format!("{}    {}", label("Phone:", color), or_dash(&p.phone)),
        format!("{}  {}", label("Website:", color), or_dash(&p.website)),
        String::new(),
        heading("Address", color),
        format!("  {}   {}", label("Street:", color), or_dash(&p.address.street)),
        format!("  {}    {}", label("Suite:", color), or_dash(&p.address.suite)),
        format!("  {}     {}", label("City:", color), or_dash(&p.address.city)),
        format!("  {}      {}", label("Zip:", color), or_dash(&p.address.zip)),
    ];
    if let Some(geo) = p.address.geo {
        lines.push(format!(
            "  {}      {:.4}, {:.4}",
            label("Geo:", color),
            geo.latitude,
            geo.longitude
        ));
    }
    lines.extend([
        String::new(),
        heading("Company", color),
        format!("  {}        {}", label("Name:", color), or_dash(&p.company.name)),
        format!(
            "  {} {}",
            label("Catchphrase:", color),
            or_dash(&p.company.catchphrase)
        ),
        format!("  {}     {}", label("Tagline:", color), or_dash(&p.company.tagline)),
    ]);
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    directory: &Directory,
    args: ShowArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let id = parse_target(&args.target)?;
    let person = directory.fetch_person(&id).await?;

    let color = output::should_color(&global.color_mode());
    let out = output::render_single(
        &global.output_format(),
        &person,
        |p| detail(p, color),
        |p| p.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rolodex_core::{Address, Company, GeoPoint};

    #[test]
    fn parses_bare_ids_and_paths() {
        assert_eq!(parse_target("7").unwrap(), PersonId::Numeric(7));
        assert_eq!(parse_target("/user/7").unwrap(), PersonId::Numeric(7));
        assert_eq!(parse_target("abc").unwrap(), PersonId::Text("abc".into()));
    }

    #[test]
    fn rejects_non_detail_paths() {
        assert!(matches!(parse_target("/"), Err(CliError::Validation { .. })));
        assert!(matches!(parse_target("/users/7"), Err(CliError::Validation { .. })));
        assert!(matches!(parse_target("  "), Err(CliError::Validation { .. })));
    }

    #[test]
    fn detail_lists_every_section() {
        let person = Person {
            id: PersonId::from(1),
            name: "Leanne Graham".into(),
            username: "Bret".into(),
            email: "Sincere@april.biz".into(),
            phone: "1-770-736-8031 x56442".into(),
            website: "hildegard.org".into(),
            address: Address {
                street: "Kulas Light".into(),
                suite: "Apt. 556".into(),
                city: "Gwenborough".into(),
                zip: "92998-3874".into(),
                geo: Some(GeoPoint {
                    latitude: -37.3159,
                    longitude: 81.1496,
                }),
            },
            company: Company {
                name: "Romaguera-Crona".into(),
                catchphrase: "Multi-layered client-server neural-net".into(),
                tagline: "harness real-time e-markets".into(),
            },
        };

        let text = detail(&person, false);
        assert!(text.starts_with("Leanne Graham (@Bret)"));
        assert!(text.contains("Gwenborough"));
        assert!(text.contains("-37.3159, 81.1496"));
        assert!(text.contains("harness real-time e-markets"));
    }
}
