use clap::{Arg, ArgMatches, Command};
use log::error;
use roomshare::prelude::*;
use roomshare::error::Result;

fn listing_args(cmd: Command<'static>, required: bool) -> Command<'static> {
    let text = |name: &'static str, help: &'static str| {
        Arg::new(name)
            .long(name)
            .takes_value(true)
            .required(required)
            .help(help)
    };

    cmd.arg(text("title", "Listing title"))
        .arg(text("location", "Where the room is"))
        .arg(text("rent", "Monthly rent"))
        .arg(text("room-type", "Single, Shared, Master or Studio"))
        .arg(text("description", "Describe the room"))
        .arg(text("contact", "Phone number or preferred contact method"))
        .arg(
            Arg::new("availability")
                .long("availability")
                .takes_value(true)
                .help("Available or Not Available"),
        )
        .arg(
            Arg::new("preference")
                .long("preference")
                .takes_value(true)
                .multiple_occurrences(true)
                .help("Lifestyle preference, may be repeated"),
        )
}

fn cli() -> Command<'static> {
    let id = Arg::new("id").required(true).help("Listing id");

    Command::new("roomshare")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse and manage roommate listings")
        .arg(
            Arg::new("email")
                .long("email")
                .global(true)
                .takes_value(true)
                .env("ROOMSHARE_USER_EMAIL")
                .help("Email of the signed-in user"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .global(true)
                .takes_value(true)
                .env("ROOMSHARE_USER_NAME")
                .help("Display name of the signed-in user"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("List every listing")
                .arg(Arg::new("mine").long("mine").help("Only listings you created")),
        )
        .subcommand(Command::new("featured").about("List featured listings"))
        .subcommand(Command::new("show").about("Show one listing").arg(id.clone()))
        .subcommand(listing_args(Command::new("add").about("Create a listing"), true))
        .subcommand(listing_args(
            Command::new("edit").about("Edit one of your listings").arg(id.clone()),
            false,
        ))
        .subcommand(Command::new("delete").about("Delete a listing").arg(id.clone()))
        .subcommand(Command::new("like").about("Like a listing and see its contact").arg(id))
}

fn current_user(matches: &ArgMatches) -> Option<User> {
    matches
        .value_of("email")
        .map(|email| User::new(email, matches.value_of("name").unwrap_or_default()))
}

fn print_row(listing: &Listing) {
    let (shown, hidden) = listing.preference_preview();
    let mut prefs: Vec<String> = shown.iter().map(|p| p.to_string()).collect();
    if hidden > 0 {
        prefs.push(format!("+{} more", hidden));
    }
    println!(
        "{}  {}  {}  {}  ${}/month  {}  {} people  [{}]",
        listing.id,
        listing.title,
        listing.location,
        listing.room_type,
        listing.rent,
        listing.availability,
        listing.like_count,
        prefs.join(", "),
    );
}

fn print_details(listing: &Listing, contact: Option<&str>) {
    println!("{} people interested in", listing.like_count);
    println!("{}", listing.title);
    println!("  Location:     {}", listing.location);
    println!("  Room type:    {}", listing.room_type);
    println!("  Rent:         ${}/month", listing.rent);
    println!("  Availability: {}", listing.availability);
    println!("  Posted by:    {} <{}>", listing.owner_name, listing.owner_email);
    if let Some(contact) = contact {
        println!("  Contact:      {}", contact);
    }
    let prefs: Vec<&str> = listing.lifestyle_preferences.iter().map(|p| p.as_str()).collect();
    println!("  Preferences:  {}", prefs.join(", "));
    println!();
    println!("{}", listing.description);
}

/// Overlay the values given on the command line onto `payload`
fn apply_args(mut payload: ListingPayload, args: &ArgMatches) -> Result<ListingPayload> {
    if let Some(title) = args.value_of("title") {
        payload.title = title.to_string();
    }
    if let Some(location) = args.value_of("location") {
        payload.location = location.to_string();
    }
    if let Some(rent) = args.value_of("rent") {
        payload.rent = rent
            .parse()
            .map_err(|_| Error::validation(format!("rent {:?} is not a number", rent)))?;
    }
    if let Some(room_type) = args.value_of("room-type") {
        payload.room_type = room_type.parse()?;
    }
    if let Some(description) = args.value_of("description") {
        payload.description = description.to_string();
    }
    if let Some(contact) = args.value_of("contact") {
        payload.contact = contact.to_string();
    }
    if let Some(availability) = args.value_of("availability") {
        payload.availability = availability.parse()?;
    }
    if let Some(prefs) = args.values_of("preference") {
        payload.lifestyle_preferences = prefs
            .map(|p| p.parse::<Lifestyle>())
            .collect::<Result<_>>()?;
    }
    Ok(payload)
}

async fn run(matches: ArgMatches) -> Result<()> {
    let roomshare = Roomshare::from_env()?;
    let mut listings = roomshare.listings();

    let (command, args) = match matches.subcommand() {
        Some(found) => found,
        None => return Ok(()),
    };
    let user = current_user(args);

    match (command, args) {
        ("list", args) => {
            listings.load().await?;
            if args.is_present("mine") {
                let user = user.as_ref().ok_or(Error::AuthRequired)?;
                listings.owned_by(user).into_iter().for_each(print_row);
            } else {
                listings.listings().iter().for_each(print_row);
            }
        }
        ("featured", _) => {
            listings.load_featured().await?;
            listings.listings().iter().for_each(print_row);
        }
        ("show", args) => {
            let id = args.value_of("id").unwrap_or_default();
            let listing = listings.refresh(id).await?;
            print_details(&listing, listings.contact(id));
        }
        ("add", args) => {
            let owner = user.clone().unwrap_or_else(|| User::new("", ""));
            let base = ListingPayload::new(&owner, "", "", 0.0, RoomType::Single);
            let payload = apply_args(base, args)?;
            let created = listings.add(user.as_ref(), payload).await?;
            println!("Listing {} has been added", created.id);
        }
        ("edit", args) => {
            let id = args.value_of("id").unwrap_or_default();
            let current = listings.refresh(id).await?;
            let payload = apply_args(ListingPayload::from_listing(&current), args)?;
            let updated = listings.replace(user.as_ref(), id, payload).await?;
            print_details(&updated, None);
        }
        ("delete", args) => {
            let id = args.value_of("id").unwrap_or_default();
            listings.remove(user.as_ref(), id).await?;
            println!("Listing {} has been deleted", id);
        }
        ("like", args) => {
            let id = args.value_of("id").unwrap_or_default();
            listings.refresh(id).await?;
            listings.increment_like(user.as_ref(), id).await?;
            if let Some(listing) = listings.get(id) {
                print_details(listing, listings.contact(id));
            }
        }
        (other, _) => {
            return Err(Error::validation(format!("unknown command {}", other)));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let matches = cli().get_matches();
    if let Err(e) = run(matches).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
