//! alumni directory / filters / profile / edit-profile commands

use clap::Args;
use dialoguer::Input;
use directory::{DirectoryFilter, DirectoryQuery, SortKey};
use network::Section;
use shared::{parse_tag_list, ProfileUpdate};

use super::reported;
use crate::presenter::format_profile;
use crate::Session;

#[derive(Debug, Args)]
pub struct DirectoryCommand {
    /// Case-insensitive name search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Batch range such as 2015-2020
    #[arg(short, long)]
    pub batch: Option<String>,

    #[arg(long)]
    pub industry: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Comma-separated tags; any one must match
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Only verified (true) or unverified (false) alumni
    #[arg(long)]
    pub verified: Option<bool>,

    /// newest, active or connected
    #[arg(long)]
    pub sort: Option<SortKey>,

    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

impl DirectoryCommand {
    pub fn query(&self) -> DirectoryQuery {
        let verified = match self.verified {
            Some(true) => "true",
            Some(false) => "false",
            None => "",
        };
        let filter = DirectoryFilter::from_inputs(
            self.search.as_deref().unwrap_or_default(),
            self.batch.as_deref().unwrap_or_default(),
            self.industry.as_deref().unwrap_or_default(),
            self.location.as_deref().unwrap_or_default(),
            self.tags.as_deref().unwrap_or_default(),
            verified,
        );

        DirectoryQuery::new(filter)
            .sorted_by(self.sort.unwrap_or_default())
            .on_page(self.page)
    }

    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.presenter.set_directory_query(self.query());
        session.network.show_section(Section::Directory);
        Ok(())
    }
}

/// List the industries and locations available to filter on
#[derive(Debug, Args)]
pub struct FiltersCommand {}

impl FiltersCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        let options = session.network.filter_options();
        println!("Industries:");
        for industry in &options.industries {
            println!("  - {}", industry);
        }
        println!("Locations:");
        for location in &options.locations {
            println!("  - {}", location);
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ProfileCommand {
    /// Alumni id
    pub id: u64,
}

impl ProfileCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        let record = session.network.profile(self.id)?;
        println!("{}", format_profile(&record));
        Ok(())
    }
}

/// Edit a profile. Fields not given keep their current value; with no
/// field flags at all, every field is prompted for.
#[derive(Debug, Args)]
pub struct EditProfileCommand {
    /// Alumni id
    pub id: u64,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub batch: Option<i32>,
    #[arg(long)]
    pub degree: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl EditProfileCommand {
    fn has_fields(&self) -> bool {
        self.name.is_some()
            || self.batch.is_some()
            || self.degree.is_some()
            || self.role.is_some()
            || self.company.is_some()
            || self.location.is_some()
            || self.tags.is_some()
            || self.bio.is_some()
            || self.linkedin.is_some()
            || self.email.is_some()
    }

    /// Overlay the given flags on `update`
    pub fn apply_flags(&self, mut update: ProfileUpdate) -> ProfileUpdate {
        fn set<T: Clone>(field: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *field = v.clone();
            }
        }

        set(&mut update.name, &self.name);
        set(&mut update.batch, &self.batch);
        set(&mut update.degree, &self.degree);
        set(&mut update.role, &self.role);
        set(&mut update.company, &self.company);
        set(&mut update.location, &self.location);
        set(&mut update.bio, &self.bio);
        set(&mut update.linkedin, &self.linkedin);
        set(&mut update.email, &self.email);
        if let Some(tags) = &self.tags {
            update.tags = parse_tag_list(tags);
        }
        update
    }

    fn prompt(mut update: ProfileUpdate) -> anyhow::Result<ProfileUpdate> {
        fn text(prompt: &str, current: &str) -> anyhow::Result<String> {
            Ok(Input::<String>::new()
                .with_prompt(prompt)
                .with_initial_text(current)
                .allow_empty(true)
                .interact_text()?)
        }

        update.name = text("Name", &update.name)?;
        update.batch = Input::<i32>::new()
            .with_prompt("Batch")
            .default(update.batch)
            .interact_text()?;
        update.degree = text("Degree", &update.degree)?;
        update.role = text("Role", &update.role)?;
        update.company = text("Company", &update.company)?;
        update.location = text("Location", &update.location)?;
        update.tags = parse_tag_list(&text("Tags", &update.tags.join(", "))?);
        update.bio = text("Bio", &update.bio)?;
        update.linkedin = text("LinkedIn", &update.linkedin)?;
        update.email = text("Email", &update.email)?;
        Ok(update)
    }

    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        let current = ProfileUpdate::from_record(&session.network.profile(self.id)?);
        let update = if self.has_fields() {
            self.apply_flags(current)
        } else {
            Self::prompt(current)?
        };

        session.network.set_active_section(Section::Directory);
        reported(session.network.edit_profile(self.id, update))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory::{BatchRange, TagTerms};
    use shared::AlumniRecord;

    fn directory_args() -> DirectoryCommand {
        DirectoryCommand {
            search: None,
            batch: None,
            industry: None,
            location: None,
            tags: None,
            verified: None,
            sort: None,
            page: 1,
        }
    }

    #[test]
    fn test_query_from_flags() {
        let args = DirectoryCommand {
            search: Some(String::new()),
            batch: Some("2015-2020".to_string()),
            tags: Some("ML, Web".to_string()),
            verified: Some(true),
            sort: Some(SortKey::NewestBatchFirst),
            page: 2,
            ..directory_args()
        };

        let query = args.query();
        assert_eq!(query.filter.name_contains, None);
        assert_eq!(query.filter.batch_range, Some(BatchRange::new(2015, 2020)));
        assert_eq!(query.filter.tags_any, TagTerms::parse("ml,web"));
        assert_eq!(query.filter.verified, Some(true));
        assert_eq!(query.sort, SortKey::NewestBatchFirst);
        assert_eq!(query.page, 2);
    }

    #[test]
    fn test_blank_flags_are_no_constraint() {
        let args = DirectoryCommand {
            search: Some(String::new()),
            industry: Some(String::new()),
            location: Some(String::new()),
            tags: Some(" , ".to_string()),
            ..directory_args()
        };
        assert_eq!(args.query().filter, DirectoryFilter::default());

        let args = DirectoryCommand {
            location: Some("Pune".to_string()),
            verified: Some(false),
            ..directory_args()
        };
        let filter = args.query().filter;
        assert_eq!(filter.location.as_deref(), Some("Pune"));
        assert_eq!(filter.verified, Some(false));
    }

    #[test]
    fn test_malformed_batch_is_no_constraint() {
        let args = DirectoryCommand {
            batch: Some("2015".to_string()),
            ..directory_args()
        };
        assert_eq!(args.query().filter.batch_range, None);
    }

    #[test]
    fn test_apply_flags_keeps_unset_fields() {
        let record = AlumniRecord::new(1, "Ada").with_batch(2015).with_tags(["ml"]);
        let args = EditProfileCommand {
            id: 1,
            name: None,
            batch: None,
            degree: None,
            role: Some("CTO".to_string()),
            company: None,
            location: None,
            tags: Some("ml, rust".to_string()),
            bio: None,
            linkedin: None,
            email: None,
        };
        assert!(args.has_fields());

        let update = args.apply_flags(ProfileUpdate::from_record(&record));
        assert_eq!(update.name, "Ada");
        assert_eq!(update.batch, 2015);
        assert_eq!(update.role, "CTO");
        assert_eq!(update.tags, vec!["ml", "rust"]);
    }
}
