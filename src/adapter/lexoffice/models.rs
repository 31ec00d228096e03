//! # Lexware Office Wire Models
//!
//! contacts API のレスポンス表現とドメインエンティティへの変換
//!
//! 会社と個人が同じエンドポイントから返るため、`company` ブロックの
//! 有無で会社コンタクトを判定する。

use serde::Deserialize;

use crate::domain::entities::lex_contact::{Address, ContactPerson, LexContact};

/// contacts 一覧レスポンス（ページング付き）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    #[serde(default)]
    pub content: Vec<ContactDto>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
}

/// コンタクト1件のレスポンス
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: String,
    pub organization_id: Option<String>,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub roles: RolesDto,
    pub company: Option<CompanyDto>,
    #[serde(default)]
    pub addresses: AddressesDto,
    #[serde(default)]
    pub email_addresses: EmailAddressesDto,
    #[serde(default)]
    pub phone_numbers: PhoneNumbersDto,
    pub note: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

impl ContactDto {
    /// 会社コンタクトであればドメインエンティティへ変換する
    ///
    /// 個人コンタクト（`company` ブロックなし）は `None`
    pub fn into_company(self) -> Option<LexContact> {
        let company = self.company?;
        Some(LexContact {
            id: self.id,
            organization_id: self.organization_id,
            version: self.version,
            customer_number: self
                .roles
                .customer
                .and_then(|role| role.number)
                .map(NumberOrText::into_string),
            name: company.name.unwrap_or_default(),
            tax_number: company.tax_number,
            vat_id: company.vat_registration_id,
            allow_tax_free_invoices: company.allow_tax_free_invoices,
            contact_persons: company
                .contact_persons
                .into_iter()
                .map(ContactPersonDto::into_domain)
                .collect(),
            email_addresses: self.email_addresses.business,
            phone_numbers: self.phone_numbers.business,
            fax_numbers: self.phone_numbers.fax,
            note: self.note,
            archived: self.archived,
            billing_addresses: self
                .addresses
                .billing
                .into_iter()
                .map(AddressDto::into_domain)
                .collect(),
            shipping_addresses: self
                .addresses
                .shipping
                .into_iter()
                .map(AddressDto::into_domain)
                .collect(),
        })
    }
}

/// コンタクトのロール
#[derive(Debug, Default, Deserialize)]
pub struct RolesDto {
    pub customer: Option<RoleDto>,
}

#[derive(Debug, Deserialize)]
pub struct RoleDto {
    pub number: Option<NumberOrText>,
}

/// 顧客番号は整数で返るが、文字列にも耐える
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    pub fn into_string(self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s,
        }
    }
}

/// `company` ブロック
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub name: Option<String>,
    pub tax_number: Option<String>,
    pub vat_registration_id: Option<String>,
    pub allow_tax_free_invoices: Option<bool>,
    #[serde(default)]
    pub contact_persons: Vec<ContactPersonDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPersonDto {
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub primary: bool,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
}

impl ContactPersonDto {
    fn into_domain(self) -> ContactPerson {
        ContactPerson {
            salutation: self.salutation,
            first_name: self.first_name,
            last_name: self.last_name,
            primary: self.primary,
            email_address: self.email_address,
            phone_number: self.phone_number,
        }
    }
}

/// `addresses` ブロック（billing / shipping のみ使用）
#[derive(Debug, Default, Deserialize)]
pub struct AddressesDto {
    #[serde(default)]
    pub billing: Vec<AddressDto>,
    #[serde(default)]
    pub shipping: Vec<AddressDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
}

impl AddressDto {
    fn into_domain(self) -> Address {
        Address {
            street: self.street,
            zip: self.zip,
            city: self.city,
            country_code: self.country_code,
        }
    }
}

/// `phoneNumbers` ブロック（business / fax のみ使用）
#[derive(Debug, Default, Deserialize)]
pub struct PhoneNumbersDto {
    #[serde(default)]
    pub business: Vec<String>,
    #[serde(default)]
    pub fax: Vec<String>,
}

/// `emailAddresses` ブロック（business のみ使用）
#[derive(Debug, Default, Deserialize)]
pub struct EmailAddressesDto {
    #[serde(default)]
    pub business: Vec<String>,
}
