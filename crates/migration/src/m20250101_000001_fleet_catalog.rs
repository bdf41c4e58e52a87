use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Stores keep their devices embedded as a JSON document
        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Stores::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Stores::Name).string().not_null())
                    .col(ColumnDef::new(Stores::Comuna).string().not_null())
                    .col(ColumnDef::new(Stores::SapCode).string().not_null())
                    .col(ColumnDef::new(Stores::Address).string().not_null())
                    .col(ColumnDef::new(Stores::Latitude).double().not_null())
                    .col(ColumnDef::new(Stores::Longitude).double().not_null())
                    .col(ColumnDef::new(Stores::Status).string().not_null())
                    .col(
                        ColumnDef::new(Stores::BalancesAssisted)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Stores::BalancesSelfService)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Stores::BalancesAiVision)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Stores::LastUpdate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stores::NetworkStatus)
                            .string()
                            .not_null()
                            .default("connected"),
                    )
                    .col(
                        ColumnDef::new(Stores::Latency)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Stores::SalesLevel)
                            .string()
                            .not_null()
                            .default("high"),
                    )
                    .col(ColumnDef::new(Stores::Devices).json_binary().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_stores_sap_code")
                    .table(Stores::Table)
                    .col(Stores::SapCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Campaigns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campaigns::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campaigns::Name).string().not_null())
                    .col(ColumnDef::new(Campaigns::StartDate).date().not_null())
                    .col(ColumnDef::new(Campaigns::EndDate).date().not_null())
                    .col(ColumnDef::new(Campaigns::Status).string().not_null())
                    .col(ColumnDef::new(Campaigns::WallpaperUrl).string().not_null())
                    .col(
                        ColumnDef::new(Campaigns::DeployedCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Campaigns::TotalBalances)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Campaigns::StoresApplied)
                            .json_binary()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alerts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Alerts::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Alerts::StoreId).string().not_null())
                    .col(ColumnDef::new(Alerts::StoreName).string().not_null())
                    .col(ColumnDef::new(Alerts::AlertType).string().not_null())
                    .col(ColumnDef::new(Alerts::Message).string().not_null())
                    .col(ColumnDef::new(Alerts::Priority).string().not_null())
                    .col(
                        ColumnDef::new(Alerts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alerts::Resolved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_alerts_resolved")
                    .table(Alerts::Table)
                    .col(Alerts::Resolved)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tickets::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Tickets::DeviceId).string().not_null())
                    .col(ColumnDef::new(Tickets::StoreName).string().not_null())
                    .col(ColumnDef::new(Tickets::StoreComuna).string().not_null())
                    .col(ColumnDef::new(Tickets::StoreAddress).string().not_null())
                    .col(ColumnDef::new(Tickets::SapCode).string().not_null())
                    .col(ColumnDef::new(Tickets::Issue).string().not_null())
                    .col(ColumnDef::new(Tickets::Description).text().not_null())
                    .col(ColumnDef::new(Tickets::ReportedTo).string().not_null())
                    .col(ColumnDef::new(Tickets::Status).string().not_null())
                    .col(
                        ColumnDef::new(Tickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tickets::AssignedTo).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tickets_created_at")
                    .table(Tickets::Table)
                    .col(Tickets::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alerts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Campaigns::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stores::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Stores {
    Table,
    Id,
    Name,
    Comuna,
    SapCode,
    Address,
    Latitude,
    Longitude,
    Status,
    BalancesAssisted,
    BalancesSelfService,
    BalancesAiVision,
    LastUpdate,
    NetworkStatus,
    Latency,
    SalesLevel,
    Devices,
}

#[derive(DeriveIden)]
enum Campaigns {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    Status,
    WallpaperUrl,
    DeployedCount,
    TotalBalances,
    StoresApplied,
}

#[derive(DeriveIden)]
enum Alerts {
    Table,
    Id,
    StoreId,
    StoreName,
    AlertType,
    Message,
    Priority,
    CreatedAt,
    Resolved,
}

#[derive(DeriveIden)]
enum Tickets {
    Table,
    Id,
    DeviceId,
    StoreName,
    StoreComuna,
    StoreAddress,
    SapCode,
    Issue,
    Description,
    ReportedTo,
    Status,
    CreatedAt,
    AssignedTo,
}
