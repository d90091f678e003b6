//! Create `appointment` table.
//!
//! User deletion cascades; service/branch/status deletion clears the
//! reference and keeps the appointment row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::AppointmentId))
                    .col(integer(Appointment::UserId).not_null())
                    .col(integer_null(Appointment::ServiceId))
                    .col(integer_null(Appointment::BranchId))
                    .col(integer_null(Appointment::StatusId))
                    .col(date(Appointment::DesiredDate).not_null())
                    .col(time(Appointment::DesiredTime).not_null())
                    .col(timestamp_with_time_zone(Appointment::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Appointment::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_user")
                            .from(Appointment::Table, Appointment::UserId)
                            .to(AppUser::Table, AppUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service")
                            .from(Appointment::Table, Appointment::ServiceId)
                            .to(Service::Table, Service::ServiceId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_branch")
                            .from(Appointment::Table, Appointment::BranchId)
                            .to(Branch::Table, Branch::BranchId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_status")
                            .from(Appointment::Table, Appointment::StatusId)
                            .to(Status::Table, Status::StatusId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Appointment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Appointment {
    Table,
    AppointmentId,
    UserId,
    ServiceId,
    BranchId,
    StatusId,
    DesiredDate,
    DesiredTime,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AppUser { Table, UserId }

#[derive(DeriveIden)]
enum Service { Table, ServiceId }

#[derive(DeriveIden)]
enum Branch { Table, BranchId }

#[derive(DeriveIden)]
enum Status { Table, StatusId }
