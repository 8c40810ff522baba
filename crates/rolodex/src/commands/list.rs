//! `list` handler: one fetch, then the filter → sort → paginate pipeline.

use tabled::Tabled;

use rolodex_core::{
    DerivedPage, Directory, ListQuery, Person, SortDirection, derive_page, filter_and_sort,
};

use crate::cli::{GlobalOpts, ListArgs, OutputFormat, SortOrder};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PersonRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Company")]
    company: String,
}

impl From<&Person> for PersonRow {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            email: p.email.clone(),
            city: p.address.city.clone(),
            company: p.company.name.clone(),
        }
    }
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Ascending,
            SortOrder::Desc => SortDirection::Descending,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    directory: &Directory,
    args: ListArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let people = directory.fetch_people().await?;
    let term = args.search.unwrap_or_default();
    let sort = SortDirection::from(args.sort);
    let format = global.output_format();

    let (shown, footer) = if args.all {
        let matches: Vec<Person> = filter_and_sort(&people, &term, sort)
            .into_iter()
            .cloned()
            .collect();
        let footer = match_count(matches.len());
        (matches, footer)
    } else {
        let page = derive_page(&people, &ListQuery::new(term, sort, args.page));
        let footer = page_footer(&page);
        (page.items, footer)
    };

    let out = output::render_list(
        &format,
        &shown,
        |p| PersonRow::from(p),
        |p| p.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);

    if format == OutputFormat::Table && !global.quiet {
        eprintln!("{footer}");
    }
    Ok(())
}

fn match_count(n: usize) -> String {
    match n {
        0 => "No people found".into(),
        1 => "1 person".into(),
        n => format!("{n} people"),
    }
}

fn page_footer(page: &DerivedPage<Person>) -> String {
    if page.total_matches == 0 {
        return match_count(0);
    }
    format!(
        "Page {} of {} · {}",
        page.page,
        page.total_pages,
        match_count(page.total_matches)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_core::PersonId;

    fn page(page: usize, total_pages: usize, total_matches: usize) -> DerivedPage<Person> {
        DerivedPage {
            items: Vec::new(),
            page,
            total_pages,
            total_matches,
        }
    }

    #[test]
    fn footer_reports_position() {
        assert_eq!(page_footer(&page(1, 2, 10)), "Page 1 of 2 · 10 people");
        assert_eq!(page_footer(&page(1, 1, 1)), "Page 1 of 1 · 1 person");
        assert_eq!(page_footer(&page(1, 0, 0)), "No people found");
    }

    #[test]
    fn row_uses_city_and_company() {
        let person = Person {
            id: PersonId::from(1),
            name: "Leanne Graham".into(),
            username: "Bret".into(),
            email: "Sincere@april.biz".into(),
            phone: String::new(),
            website: String::new(),
            address: rolodex_core::Address {
                city: "Gwenborough".into(),
                ..Default::default()
            },
            company: rolodex_core::Company {
                name: "Romaguera-Crona".into(),
                ..Default::default()
            },
        };
        let row = PersonRow::from(&person);
        assert_eq!(row.id, "1");
        assert_eq!(row.city, "Gwenborough");
        assert_eq!(row.company, "Romaguera-Crona");
    }

    #[test]
    fn sort_order_maps_to_direction() {
        assert_eq!(SortDirection::from(SortOrder::Desc), SortDirection::Descending);
    }
}
