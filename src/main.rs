use anyhow::{bail, Context, Result};
use apnaroom::api::{ApiClient, FilterState, RoomApi, SortOrder};
use apnaroom::config::AppConfig;
use apnaroom::inquiry::{BookingModal, ContactForm};
use apnaroom::landlord::LandlordForm;
use apnaroom::links::format_inr;
use apnaroom::models::{ProofImage, RoomType, TenantType};
use apnaroom::platform::TerminalPlatform;
use apnaroom::views::{DetailState, DetailView, ListingRender, ListingView};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apnaroom", version, about = "Browse and book rooms on ApnaRoom")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Sort {
    Newest,
    PriceAsc,
    PriceDesc,
}

impl From<Sort> for SortOrder {
    fn from(sort: Sort) -> Self {
        match sort {
            Sort::Newest => SortOrder::Newest,
            Sort::PriceAsc => SortOrder::PriceLowToHigh,
            Sort::PriceDesc => SortOrder::PriceHighToLow,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List colonies usable as a location filter
    Colonies,
    /// List rooms
    Rooms {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        colony: String,
        /// 1_RK, 2_RK, 1_BHK or 2_BHK
        #[arg(long)]
        room_type: Option<String>,
        /// BOYS, GIRLS, FAMILY or ANY
        #[arg(long)]
        tenant: Option<String>,
        #[arg(long, value_enum, default_value_t = Sort::Newest)]
        sort: Sort,
        #[arg(long)]
        available: bool,
        /// Print raw JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Show one room
    Room { id: i64 },
    /// Share a room link
    Share { id: i64 },
    /// Request a free visit
    Visit {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
    },
    /// Book a room with a 50% deposit
    Book {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        /// Payment screenshot
        #[arg(long)]
        proof: PathBuf,
    },
    /// Book a visit for the flat fee
    VisitFee {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        proof: PathBuf,
    },
    /// Ask to list your property
    Landlord {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("apnaroom=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let api: Arc<dyn RoomApi> =
        Arc::new(ApiClient::new(config.api_base_url.clone()).context("Failed to create HTTP client")?);
    let platform = TerminalPlatform;

    info!("🏠 ApnaRoom - {}", config.api_base_url);

    match cli.command {
        Command::Colonies => {
            let colonies = api.list_colonies().await?;
            for colony in colonies {
                println!("{:>4}  {}", colony.id, colony.name);
            }
        }

        Command::Rooms {
            search,
            colony,
            room_type,
            tenant,
            sort,
            available,
            json,
        } => {
            let tenant_type = match tenant {
                Some(code) => Some(
                    TenantType::from_code(&code)
                        .with_context(|| format!("Unknown tenant type: {}", code))?,
                ),
                None => None,
            };
            let filters = FilterState {
                search,
                colony_name: colony,
                room_type: room_type.as_deref().map(RoomType::from_code),
                tenant_type,
                ordering: sort.into(),
                available_only: available,
            };

            let listing = ListingView::new(api.clone(), Duration::ZERO);
            listing.set_filters(filters).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&listing.rooms())?);
                return Ok(());
            }

            match listing.render() {
                ListingRender::Cards(cards) => {
                    for (i, card) in cards.iter().enumerate() {
                        println!("{}. {} ({})", i + 1, card.title, card.price);
                        println!("   {} · {} · {}", card.colony_name, card.room_type, card.tenant_badge);
                        if card.verified {
                            println!("   ✔ Verified");
                        }
                        println!("   ID: {}", card.id);
                        println!();
                    }
                }
                ListingRender::Empty => println!("No rooms found. Try adjusting your filters."),
                ListingRender::Loading { .. } => bail!("Room list could not be loaded"),
            }
        }

        Command::Room { id } => {
            let detail = load_detail(api.clone(), &config, id).await?;
            print_detail(&detail);
        }

        Command::Share { id } => {
            let detail = load_detail(api.clone(), &config, id).await?;
            let outcome = detail.share(&platform).await;
            info!("Share finished: {:?}", outcome);
        }

        Command::Visit { id, name, phone } => {
            let detail = load_detail(api.clone(), &config, id).await?;
            let mut modal = detail
                .open_visit_request()
                .context("Room is not loaded")?;
            modal.form = ContactForm::new(name, phone);
            let receipt = modal.submit(api.as_ref(), &platform).await?;
            println!("✅ Visit requested at {}", receipt.submitted_at);
        }

        Command::Book {
            id,
            name,
            phone,
            proof,
        } => {
            let detail = load_detail(api.clone(), &config, id).await?;
            let modal = detail
                .open_deposit_booking()
                .context("Room is not loaded")?;
            run_booking(modal, name, phone, proof, api.as_ref(), &platform).await?;
        }

        Command::VisitFee {
            id,
            name,
            phone,
            proof,
        } => {
            let detail = load_detail(api.clone(), &config, id).await?;
            let modal = detail
                .open_visit_booking()
                .context("Room is not loaded")?;
            run_booking(modal, name, phone, proof, api.as_ref(), &platform).await?;
        }

        Command::Landlord {
            name,
            phone,
            address,
        } => {
            let mut form = LandlordForm::new();
            form.open();
            form.name = name;
            form.phone_number = phone;
            form.address = address;
            form.submit(api.as_ref()).await?;
            println!("✅ Thanks! We will call you to visit and photograph your property.");
        }
    }

    Ok(())
}

async fn load_detail(api: Arc<dyn RoomApi>, config: &AppConfig, id: i64) -> Result<DetailView> {
    let mut detail = DetailView::new(api, config.clone());
    if let DetailState::NotFound = detail.load(id).await {
        bail!("Room {} not found", id);
    }
    Ok(detail)
}

fn print_detail(detail: &DetailView) {
    let Some(room) = detail.room() else {
        return;
    };

    println!("{}", room.title);
    println!("{} · {} · {}", room.colony_name, room.room_type, room.tenant_type.badge());
    println!("Total monthly rent: {}", format_inr(room.price));
    if let Some(b) = detail.rent_breakdown() {
        println!(
            "   Pay now to book ({}%): {}   Pay landlord on move-in: {}",
            b.percent_now,
            format_inr(b.pay_now),
            format_inr(b.pay_later)
        );
    }
    println!();
    println!("{}", room.description_or_default());
    if let Some(url) = detail.active_image_url() {
        println!("Photo: {}", url);
    }
    if room.images.len() > 1 {
        println!("{} more photos", room.images.len() - 1);
    }
    if let Some(video) = &room.video {
        println!("Video tour: {}", video);
    }
    if let Some(url) = detail.page_url() {
        println!("URL: {}", url);
    }
}

async fn run_booking(
    mut modal: BookingModal,
    name: String,
    phone: String,
    proof: PathBuf,
    api: &dyn RoomApi,
    platform: &TerminalPlatform,
) -> Result<()> {
    println!("{} - {}", modal.plan().title(), modal.room().title);
    if let Some(b) = modal.breakdown() {
        println!("   Total monthly rent:           {}", format_inr(b.total_rent));
        println!("   Pay now to book ({}%):        {}", b.percent_now, format_inr(b.pay_now));
        println!("   Pay to landlord (on move-in): {}", format_inr(b.pay_later));
    }
    println!("Pay {} to {}", format_inr(modal.amount_due()), modal.upi_id());
    println!("QR: {}", modal.qr_image());
    println!("UPI: {}", modal.upi_link());

    modal.confirm_payment();
    modal.form = ContactForm::new(name, phone);
    modal.attach_proof(
        ProofImage::load(&proof)
            .await
            .with_context(|| format!("Failed to read {}", proof.display()))?,
    );

    modal.submit(api, platform).await?;
    println!("✅ Proof received. We will verify it and confirm within 30 minutes.");
    Ok(())
}
