use maud::{html, Markup, PreEscaped};

use crate::auth::SessionState;
use crate::domain::editor::ListingForm;
use crate::geos;
use crate::templates::desktop_layout;

/// The editor draft: form fields plus the photo slots, round-tripped
/// through hidden inputs so photo actions keep unsaved edits.
pub struct EditorVm<'a> {
    pub mls: Option<&'a str>,
    pub form: &'a ListingForm,
}

// Uploads the chosen file through our passthrough endpoint and drops the
// returned public URL into the attach field.
const UPLOAD_JS: &str = r#"
async function uploadPhoto(input) {
  const f = input.files[0];
  if (!f) return;
  const resp = await fetch('/realtor/upload?filename=' + encodeURIComponent(f.name), {
    method: 'POST',
    headers: {'Content-Type': f.type || 'application/octet-stream'},
    body: f
  });
  if (resp.ok) {
    const data = await resp.json();
    document.getElementById('photo-url').value = data.url;
  } else {
    alert('Upload failed');
  }
}
"#;

pub fn editor_page(session: &SessionState, vm: &EditorVm) -> Markup {
    let form = vm.form;
    let heading = if vm.mls.is_some() {
        "Edit your listing"
    } else {
        "List your property with us."
    };

    desktop_layout(
        "List Your Property",
        session,
        html! {
            main class="editor-page" {
                section class="card" {
                    h3 { (heading) }

                    form action="/realtor/my-listing" method="post" {
                        @if let Some(mls) = vm.mls {
                            input type="hidden" name="MLS" value=(mls);
                        }
                        input type="hidden" name="ListPhoto" value=(form.photos.list_photo);
                        @for photo in &form.photos.photos {
                            input type="hidden" name="Photo" value=(photo);
                        }

                        section class="photos" {
                            h4 { "List Photo (Only One Image Please)" }
                            @if form.photos.list_photo.is_empty() {
                                p { "No list photo yet." }
                            } @else {
                                div class="photo-row" {
                                    img src=(form.photos.list_photo) alt="";
                                    button type="submit" name="action"
                                        value={ "remove-list-photo:" (form.photos.list_photo) } {
                                        "Remove"
                                    }
                                }
                            }

                            h4 { "Photo Array" }
                            @for photo in &form.photos.photos {
                                div class="photo-row" {
                                    img src=(photo) alt="";
                                    button type="submit" name="action"
                                        value={ "remove-photo:" (photo) } {
                                        "Remove"
                                    }
                                }
                            }

                            div class="form-row" {
                                input type="file" accept="image/*" onchange="uploadPhoto(this)";
                                input type="text" id="photo-url" name="PhotoUrl"
                                    placeholder="https://...";
                                button type="submit" name="action" value="attach-list-photo" {
                                    "Set List Photo"
                                }
                                button type="submit" name="action" value="attach-photo" {
                                    "Add to Photo Array"
                                }
                            }
                        }

                        label { "Address"
                            input type="text" name="Address" value=(form.street1);
                        }
                        label { "Address 2"
                            input type="text" name="Address2" value=(form.street2);
                        }

                        div class="form-row" {
                            label { "City"
                                input type="text" name="City" value=(form.city);
                            }
                            label { "State"
                                select name="State" {
                                    option value="" disabled selected[form.state.is_empty()] {
                                        "Select a State..."
                                    }
                                    @for (abbr, name) in geos::US_STATES {
                                        option value=(abbr) selected[form.state == *abbr] { (name) }
                                    }
                                }
                            }
                            label { "Zip Code"
                                input type="text" name="ZipCode" value=(form.zip_code);
                            }
                        }

                        div class="form-row" {
                            label { "Sales Price"
                                input type="text" name="Price" value=(form.sales_price);
                            }
                            label { "Neighborhood"
                                input type="text" name="Neighborhood" value=(form.neighborhood);
                            }
                        }

                        div class="form-row" {
                            label { "Bedrooms"
                                input type="text" name="Bedrooms" value=(form.bedrooms);
                            }
                            label { "Bathrooms"
                                input type="text" name="Bathrooms" value=(form.bathrooms);
                            }
                        }

                        div class="form-row" {
                            label { "Square Feet"
                                input type="text" name="SquareFeet" value=(form.square_feet);
                            }
                            label { "Lot Size"
                                input type="text" name="LotSize" value=(form.lot_size);
                            }
                            label { "Garage Size"
                                input type="text" name="GarageSize" value=(form.garage_size);
                            }
                        }

                        label { "Description"
                            textarea name="Description" rows="3" { (form.description) }
                        }

                        button type="submit" name="action" value="save" { "Submit" }
                    }
                }

                script { (PreEscaped(UPLOAD_JS)) }
            }
        },
    )
}
